//! Configuration schema: the typed settings injected into the gateway.
//!
//! Nothing here reads the environment; see [`super::loader`] for that.

use thiserror::Error;

/// Default OpenAI-compatible endpoint (OpenRouter).
pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Default model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "anthropic/claude-haiku-4.5";

/// Errors raised while assembling configuration. Always fatal.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingEnvVar(String),
}

// ─────────────────────────────────────────────
// GatewayConfig
// ─────────────────────────────────────────────

/// Everything the HTTP gateway needs to reach the chat endpoint.
#[derive(Clone, PartialEq)]
pub struct GatewayConfig {
    /// Bearer credential.
    pub api_key: String,
    /// Base URL; `/chat/completions` is appended.
    pub api_base: String,
    /// Model identifier.
    pub model: String,
    /// Maximum tokens per reply. Omitted from requests when `None`.
    pub max_tokens: Option<u32>,
    /// Sampling temperature. Omitted from requests when `None`.
    pub temperature: Option<f64>,
}

impl GatewayConfig {
    /// Config with defaults for everything but the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Override the base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Whether a credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
            temperature: None,
        }
    }
}

// Keep the credential out of logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &if self.is_configured() { "<set>" } else { "<unset>" })
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}
