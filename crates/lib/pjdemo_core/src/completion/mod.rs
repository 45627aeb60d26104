//! Completion module — the text-generation capability handlers depend on.
//!
//! Handlers build a [`CompletionRequest`] from a prompt template and hand it
//! to a [`TextGenerator`]. The only production implementation is
//! [`openai::OpenAiCompatibleClient`], which speaks the OpenAI
//! `/chat/completions` wire format and serves both backends:
//!
//! - `"openai"` — OpenAI (`gpt-3.5-turbo`, `gpt-4`)
//! - `"siliconflow"` — SiliconFlow (`deepseek-ai/DeepSeek-R1`)
//!
//! Tests substitute their own [`TextGenerator`] returning canned text.

pub mod config;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use config::{Backend, ProviderConfig};
pub use openai::OpenAiCompatibleClient;

/// Errors that can occur while generating text.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("{backend} returned {status}: {body}")]
    Api {
        backend: Backend,
        status: u16,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no choices")]
    EmptyResponse,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with every request.
///
/// Optional knobs are omitted from the wire body when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    pub frequency_penalty: Option<f32>,
    pub stop: Option<Vec<String>>,
    /// Ask for `{"type": "text"}` output explicitly.
    pub text_response_format: bool,
}

impl SamplingParams {
    /// Plain parameters: just a length limit and temperature.
    pub fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
            top_p: None,
            top_k: None,
            frequency_penalty: None,
            stop: None,
            text_response_format: false,
        }
    }
}

/// A fully-built prompt ready to send to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub params: SamplingParams,
}

impl CompletionRequest {
    /// Content of the first user message, if any.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    /// Content of the system message, if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }
}

/// Text-generation capability.
///
/// Given a request, return the first completion's text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("x")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "x"}));
        let json = serde_json::to_value(ChatMessage::user("y")).unwrap();
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn prompt_accessors_find_messages_by_role() {
        let req = CompletionRequest {
            model: "m".into(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("usr")],
            params: SamplingParams::new(16, 0.7),
        };
        assert_eq!(req.system_prompt(), Some("sys"));
        assert_eq!(req.user_prompt(), Some("usr"));

        let user_only = CompletionRequest {
            messages: vec![ChatMessage::user("only")],
            ..req
        };
        assert_eq!(user_only.system_prompt(), None);
        assert_eq!(user_only.user_prompt(), Some("only"));
    }

    #[test]
    fn api_error_names_backend() {
        let err = CompletionError::Api {
            backend: Backend::SiliconFlow,
            status: 401,
            body: "bad key".into(),
        };
        assert_eq!(err.to_string(), "siliconflow returned 401: bad key");
    }
}
