//! HTTP gateway for OpenAI-compatible chat completion APIs.
//!
//! Talks directly to any `/chat/completions` endpoint (OpenRouter by default)
//! with bearer authentication. No timeout is configured: a stalled endpoint
//! stalls the run.

use async_trait::async_trait;
use tracing::{debug, error};

use minicode_core::config::GatewayConfig;
use minicode_core::types::{
    AssistantTurn, ChatCompletionRequest, ChatCompletionResponse, ToolDefinition, Turn,
};

use crate::error::GatewayError;
use crate::traits::ModelGateway;

// ─────────────────────────────────────────────
// HttpGateway
// ─────────────────────────────────────────────

/// A `ModelGateway` backed by `reqwest`.
pub struct HttpGateway {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    config: GatewayConfig,
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("api_base", &self.config.api_base)
            .field("model", &self.config.model)
            .finish()
    }
}

impl HttpGateway {
    /// Create a gateway from an already-loaded configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("minicode/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(HttpGateway { client, config })
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        let base = self.config.api_base.trim_end_matches('/');
        format!("{}/chat/completions", base)
    }
}

#[async_trait]
impl ModelGateway for HttpGateway {
    async fn complete(
        &self,
        transcript: &[Turn],
        tools: &[ToolDefinition],
    ) -> Result<AssistantTurn, GatewayError> {
        debug!(
            model = %self.config.model,
            turns = transcript.len(),
            tools = tools.len(),
            "calling model"
        );

        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages: transcript,
            tools,
            tool_choice: (!tools.is_empty()).then_some("auto"),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GatewayError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, body = %body, "API error");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "failed to parse model response");
            GatewayError::Decode(e.to_string())
        })?;

        let turn = parsed.into_assistant_turn().ok_or(GatewayError::NoChoices)?;
        debug!(
            has_content = turn.content.is_some(),
            tool_calls = turn.tool_calls.len(),
            finish_reason = turn.finish_reason.as_deref().unwrap_or("?"),
            "model response received"
        );
        Ok(turn)
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn display_name(&self) -> &str {
        "OpenAI-compatible"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
