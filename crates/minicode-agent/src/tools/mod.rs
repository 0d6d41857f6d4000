//! Tool modules for the Minicode agent.

pub mod base;
pub mod error;
pub mod registry;
pub mod filesystem;
pub mod shell;

pub use base::{parse_arguments, require_string, Tool, ToolParams};
pub use error::ToolError;
pub use registry::ToolRegistry;
