//! Tool registry: the ToolExecutor the agent loop dispatches through.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use minicode_core::types::ToolDefinition;
use tracing::{debug, info, warn};

use super::base::{Tool, ToolParams};
use super::filesystem::{ReadTool, WriteTool};
use super::shell::BashTool;

// ─────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────

/// Stores tools keyed by name and dispatches calls.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry holding `Read`, `Write` and `Bash`.
    ///
    /// `workspace` anchors relative paths and the shell's working directory;
    /// `None` means the process working directory.
    pub fn with_builtin_tools(workspace: Option<PathBuf>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ReadTool::new(workspace.clone())));
        registry.register(Arc::new(WriteTool::new(workspace.clone())));
        registry.register(Arc::new(BashTool::new(workspace)));
        registry
    }

    /// Register a tool. Overwrites any previous tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        debug!(tool = tool.name(), "registered tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Check if a tool is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Names of all registered tools, sorted for determinism.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// The model-facing schema for all registered tools, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> =
            self.tools.values().map(|t| t.to_definition()).collect();
        defs.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        defs
    }

    /// Execute a tool by name.
    ///
    /// Returns `None` only when no tool has that name. Tool failures come back
    /// as `Some("Error: ...")` so the model always gets text to react to.
    pub async fn execute(&self, name: &str, params: &ToolParams) -> Option<String> {
        let tool = self.tools.get(name)?;

        info!(tool = name, "executing tool");
        let result = match tool.execute(params).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = name, error = %e, "tool execution failed");
                e.to_result_text()
            }
        };
        debug!(tool = name, result_len = result.len(), "tool result");
        Some(result)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
