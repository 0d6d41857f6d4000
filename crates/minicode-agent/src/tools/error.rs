//! Tool-level failures.
//!
//! None of these are fatal: the registry renders them as `Error: ...` result
//! text so the model can see what went wrong and try something else.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments were not a JSON object.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    #[error("expected string for parameter: {0}")]
    NotAString(String),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to execute command: {0}")]
    Spawn(#[source] std::io::Error),
}

impl ToolError {
    /// The text handed back to the model in place of a result.
    pub fn to_result_text(&self) -> String {
        format!("Error: {self}")
    }
}
