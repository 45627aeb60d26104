//! OpenAI-compatible chat-completion client.
//!
//! Calls `{base_url}/chat/completions` once per request. No retries: any
//! failure is returned to the caller as a [`CompletionError`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::ProviderConfig;
use super::{ChatMessage, CompletionError, CompletionRequest, TextGenerator};

/// Upper bound on how much of an error body is kept in the error message.
const MAX_ERROR_BODY: usize = 2048;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
    n: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> ChatRequest<'a> {
    fn from_request(req: &'a CompletionRequest) -> Self {
        let p = &req.params;
        Self {
            model: &req.model,
            messages: &req.messages,
            max_tokens: p.max_tokens,
            temperature: p.temperature,
            n: 1,
            stream: false,
            top_p: p.top_p,
            top_k: p.top_k,
            frequency_penalty: p.frequency_penalty,
            stop: p.stop.as_deref(),
            response_format: p
                .text_response_format
                .then_some(ResponseFormat { kind: "text" }),
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for any backend speaking the OpenAI chat-completions format.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    config: ProviderConfig,
    url: String,
}

impl OpenAiCompatibleClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: ProviderConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Config(format!("Failed to build HTTP client: {e}")))?;
        let url = config.completions_url();
        Ok(Self {
            client,
            config,
            url,
        })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> CompletionError {
        if e.is_timeout() {
            CompletionError::Timeout(self.config.timeout.as_secs())
        } else {
            CompletionError::Transport(format!("{} request failed: {e}", self.config.backend))
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleClient {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        debug!(
            backend = %self.config.backend,
            model = %request.model,
            max_tokens = request.params.max_tokens,
            "requesting chat completion"
        );

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.config.api_key)
            .json(&ChatRequest::from_request(request))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let mut body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            warn!(backend = %self.config.backend, %status, "chat completion rejected");
            return Err(CompletionError::Api {
                backend: self.config.backend,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let data: ChatResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let content = data
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?
            .message
            .content
            .ok_or_else(|| {
                CompletionError::MalformedResponse("first choice has no content".to_string())
            })?;

        debug!(
            backend = %self.config.backend,
            chars = content.chars().count(),
            "chat completion received"
        );
        Ok(content)
    }
}
