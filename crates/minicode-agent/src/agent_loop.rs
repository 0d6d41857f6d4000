//! Agent loop: the model and tool-calling state machine.
//!
//! One round is a single model call followed by the sequential dispatch of
//! every tool call it returned. Rounds repeat until a reply carries no tool
//! calls. The full transcript goes to the gateway every round.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use minicode_core::types::{ToolCall, ToolDefinition};
use minicode_providers::{GatewayError, ModelGateway};

use crate::conversation::Conversation;
use crate::tools::base::parse_arguments;
use crate::tools::registry::ToolRegistry;

/// Where the loop is between two steps.
#[derive(Debug)]
enum LoopState {
    AwaitingModel,
    DispatchingTools(Vec<ToolCall>),
    Done(String),
}

/// Outcome of a finished run.
#[derive(Clone, Debug)]
pub struct Completion {
    /// Text of the final assistant turn (empty if the model sent none).
    pub content: String,
    /// Every turn exchanged during the run.
    pub transcript: Conversation,
    /// Number of model calls made.
    pub rounds: usize,
}

// ─────────────────────────────────────────────
// AgentLoop
// ─────────────────────────────────────────────

pub struct AgentLoop {
    gateway: Arc<dyn ModelGateway>,
    tools: ToolRegistry,
    /// Built once from the registry and sent unchanged every round.
    tool_schema: Vec<ToolDefinition>,
}

impl AgentLoop {
    pub fn new(gateway: Arc<dyn ModelGateway>, tools: ToolRegistry) -> Self {
        let tool_schema = tools.definitions();

        info!(
            model = %gateway.model(),
            gateway = gateway.display_name(),
            tools = tools.len(),
            "agent loop initialized"
        );

        Self {
            gateway,
            tools,
            tool_schema,
        }
    }

    /// Agent loop with the `Read`, `Write` and `Bash` tools.
    pub fn with_builtin_tools(gateway: Arc<dyn ModelGateway>, workspace: Option<PathBuf>) -> Self {
        Self::new(gateway, ToolRegistry::with_builtin_tools(workspace))
    }

    /// Run the conversation for `prompt` until the model stops calling tools.
    ///
    /// # Errors
    /// Any gateway failure aborts the run. Tool failures never do; they are
    /// handed back to the model as result text.
    pub async fn run(&self, prompt: &str) -> Result<Completion, GatewayError> {
        let mut conversation = Conversation::new(prompt);
        let mut state = LoopState::AwaitingModel;
        let mut rounds = 0;

        loop {
            state = match state {
                LoopState::AwaitingModel => {
                    rounds += 1;
                    debug!(round = rounds, turns = conversation.len(), "model call");

                    let reply = self
                        .gateway
                        .complete(conversation.snapshot(), &self.tool_schema)
                        .await?;
                    conversation.add_assistant_turn(&reply);

                    if reply.has_tool_calls() {
                        LoopState::DispatchingTools(reply.tool_calls)
                    } else {
                        LoopState::Done(reply.content.unwrap_or_default())
                    }
                }
                LoopState::DispatchingTools(calls) => {
                    for call in &calls {
                        self.dispatch(call, &mut conversation).await;
                    }
                    LoopState::AwaitingModel
                }
                LoopState::Done(content) => {
                    info!(rounds, turns = conversation.len(), "agent run finished");
                    return Ok(Completion {
                        content,
                        transcript: conversation,
                        rounds,
                    });
                }
            };
        }
    }

    /// Run and return only the final text.
    pub async fn process_direct(&self, prompt: &str) -> Result<String, GatewayError> {
        Ok(self.run(prompt).await?.content)
    }

    /// Execute one tool call and record its result.
    ///
    /// Calls naming an unregistered tool are skipped without a tool turn.
    async fn dispatch(&self, call: &ToolCall, conversation: &mut Conversation) {
        let name = call.function.name.as_str();

        let outcome = match parse_arguments(&call.function.arguments) {
            Ok(params) => self.tools.execute(name, &params).await,
            Err(e) if self.tools.has(name) => {
                warn!(tool = name, call_id = %call.id, error = %e, "malformed tool arguments");
                Some(e.to_result_text())
            }
            Err(_) => None,
        };

        let Some(result) = outcome else {
            warn!(tool = name, call_id = %call.id, "unknown tool, skipping call");
            return;
        };

        conversation.add_tool_result(&call.id, result);
    }

    /// The tool registry (for inspection and tests).
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// The model the gateway is configured for.
    pub fn model(&self) -> &str {
        self.gateway.model()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
