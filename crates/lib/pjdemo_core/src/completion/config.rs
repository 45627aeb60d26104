//! Backend configuration resolution.
//!
//! Credentials and endpoints come from the process environment (a `.env`
//! file is loaded by the binaries before this runs). A missing credential is
//! a [`CompletionError::Config`] raised at startup, not on the first request.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use super::CompletionError;

/// Default request timeout; long-form reports can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const TIMEOUT_VAR: &str = "LLM_TIMEOUT_SECS";

/// Remote chat-completion backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// OpenAI chat completions.
    OpenAi,
    /// SiliconFlow's OpenAI-compatible endpoint (hosts DeepSeek-R1).
    SiliconFlow,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::OpenAi => "openai",
            Backend::SiliconFlow => "siliconflow",
        }
    }

    fn api_key_var(self) -> &'static str {
        match self {
            Backend::OpenAi => "OPENAI_API_KEY",
            Backend::SiliconFlow => "SILICONFLOW_API_KEY",
        }
    }

    fn base_url_var(self) -> &'static str {
        match self {
            Backend::OpenAi => "OPENAI_BASE_URL",
            Backend::SiliconFlow => "SILICONFLOW_BASE_URL",
        }
    }

    fn default_base_url(self) -> &'static str {
        match self {
            Backend::OpenAi => "https://api.openai.com/v1",
            Backend::SiliconFlow => "https://api.siliconflow.cn/v1",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved connection settings for one backend.
#[derive(Clone)]
pub struct ProviderConfig {
    pub backend: Backend,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: Url,
    pub api_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("backend", &self.backend)
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Resolve config for `backend` from environment variables.
    ///
    /// | Variable                | Default                          |
    /// |-------------------------|----------------------------------|
    /// | `OPENAI_API_KEY`        | required for `openai`            |
    /// | `OPENAI_BASE_URL`       | `https://api.openai.com/v1`      |
    /// | `SILICONFLOW_API_KEY`   | required for `siliconflow`       |
    /// | `SILICONFLOW_BASE_URL`  | `https://api.siliconflow.cn/v1`  |
    /// | `LLM_TIMEOUT_SECS`      | `120`                            |
    pub fn from_env(backend: Backend) -> Result<Self, CompletionError> {
        Self::from_lookup(backend, |name| env::var(name).ok())
    }

    /// Resolve config using an arbitrary variable lookup.
    ///
    /// Tests use this instead of mutating the process environment.
    pub fn from_lookup<F>(backend: Backend, lookup: F) -> Result<Self, CompletionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(backend.api_key_var())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                CompletionError::Config(format!(
                    "{} is required for the {backend} backend",
                    backend.api_key_var()
                ))
            })?;

        let raw_url = lookup(backend.base_url_var())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| backend.default_base_url().to_string());
        let base_url = Url::parse(raw_url.trim()).map_err(|e| {
            CompletionError::Config(format!(
                "{} is not a valid URL ({raw_url}): {e}",
                backend.base_url_var()
            ))
        })?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                CompletionError::Config(format!(
                    "{TIMEOUT_VAR} must be a positive integer, got {raw:?}"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            backend,
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.base_url.as_str().trim_end_matches('/')
        )
    }
}
