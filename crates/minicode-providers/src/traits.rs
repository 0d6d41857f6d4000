//! ModelGateway trait: the opaque boundary between the agent loop and the
//! remote chat endpoint.

use async_trait::async_trait;
use minicode_core::types::{AssistantTurn, ToolDefinition, Turn};

use crate::error::GatewayError;

/// Sends a transcript to a model and returns one assistant turn.
///
/// The endpoint is stateless: callers pass the full transcript every time.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Request the next assistant turn.
    ///
    /// # Arguments
    /// * `transcript`: Every turn so far, oldest first.
    /// * `tools`     : Schemas of the tools the model may call.
    ///
    /// # Errors
    /// Any transport, status, decoding failure, or a reply with zero choices.
    async fn complete(
        &self,
        transcript: &[Turn],
        tools: &[ToolDefinition],
    ) -> Result<AssistantTurn, GatewayError>;

    /// Model identifier used for requests.
    fn model(&self) -> &str;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
