//! Filesystem tools: `Read` and `Write`.
//!
//! Relative paths resolve against the optional workspace directory. No path
//! restriction is applied.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::base::{require_string, Tool, ToolParams};
use super::error::ToolError;

/// Acknowledgement returned by a successful `Write`.
pub const WRITE_ACK: &str = "File written successfully";

/// Join a relative path onto the workspace, if any.
pub(crate) fn resolve_path(path: &str, workspace: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match workspace {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}

// ─────────────────────────────────────────────
// ReadTool
// ─────────────────────────────────────────────

/// Returns the entire text content of a file.
pub struct ReadTool {
    workspace: Option<PathBuf>,
}

impl ReadTool {
    pub fn new(workspace: Option<PathBuf>) -> Self {
        Self { workspace }
    }
}

#[async_trait]
impl Tool for ReadTool {
    fn name(&self) -> &str {
        "Read"
    }

    fn description(&self) -> &str {
        "Read and return the contents of a file"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The path to the file to read"
                }
            },
            "required": ["file_path"]
        })
    }

    async fn execute(&self, params: &ToolParams) -> Result<String, ToolError> {
        let path = resolve_path(require_string(params, "file_path")?, self.workspace.as_deref());

        let result = tokio::fs::read_to_string(&path).await;
        result.map_err(|source| ToolError::Io {
            action: "failed to read",
            path,
            source,
        })
    }
}

// ─────────────────────────────────────────────
// WriteTool
// ─────────────────────────────────────────────

/// Creates or truncates a file and writes the given content.
///
/// Parent directories are not created; a missing parent is an error.
pub struct WriteTool {
    workspace: Option<PathBuf>,
}

impl WriteTool {
    pub fn new(workspace: Option<PathBuf>) -> Self {
        Self { workspace }
    }
}

#[async_trait]
impl Tool for WriteTool {
    fn name(&self) -> &str {
        "Write"
    }

    fn description(&self) -> &str {
        "Write content to a file"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The path of the file to write to"
                },
                "content": {
                    "type": "string",
                    "description": "The content to write to the file"
                }
            },
            "required": ["file_path", "content"]
        })
    }

    async fn execute(&self, params: &ToolParams) -> Result<String, ToolError> {
        let path = resolve_path(require_string(params, "file_path")?, self.workspace.as_deref());
        let content = require_string(params, "content")?;

        let result = tokio::fs::write(&path, content).await;
        result.map_err(|source| ToolError::Io {
            action: "failed to write",
            path,
            source,
        })?;
        Ok(WRITE_ACK.to_string())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
