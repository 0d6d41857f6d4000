//! Shell tool: `Bash`.
//!
//! Runs arbitrary commands through the system shell with no timeout, no
//! output cap, and no command filtering. Whatever the model asks for runs
//! with the privileges of this process.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::process::Command;
use tracing::info;

use super::base::{require_string, Tool, ToolParams};
use super::error::ToolError;

/// Returned instead of empty text when a command prints nothing.
pub const EMPTY_OUTPUT_PLACEHOLDER: &str = "Command executed successfully";

/// Execute shell commands in a subprocess.
pub struct BashTool {
    /// Working directory for commands; `None` inherits the process cwd.
    working_dir: Option<PathBuf>,
}

impl BashTool {
    pub fn new(working_dir: Option<PathBuf>) -> Self {
        Self { working_dir }
    }

    fn shell_command(command: &str) -> Command {
        let mut cmd = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", command]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", command]);
            c
        };
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

#[async_trait]
impl Tool for BashTool {
    fn name(&self) -> &str {
        "Bash"
    }

    fn description(&self) -> &str {
        "Execute a shell command"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "The command to execute"
                }
            },
            "required": ["command"]
        })
    }

    async fn execute(&self, params: &ToolParams) -> Result<String, ToolError> {
        let command = require_string(params, "command")?;

        info!(command = %command, "executing shell command");

        let mut cmd = Self::shell_command(command);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(ToolError::Spawn)?;

        // Exit status is deliberately not reported; only the text is.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if combined.is_empty() {
            Ok(EMPTY_OUTPUT_PLACEHOLDER.to_string())
        } else {
            Ok(combined)
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
