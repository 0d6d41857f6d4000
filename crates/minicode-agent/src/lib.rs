//! Minicode Agent: core loop, tools, and transcript.
//!
//! This crate contains:
//! - **tools**: Tool trait, registry, and the built-in `Read`, `Write`, `Bash` tools
//! - **conversation**: the append-only transcript of a run
//! - **agent_loop**: the model and tool-calling state machine

pub mod tools;
pub mod conversation;
pub mod agent_loop;

pub use agent_loop::{AgentLoop, Completion};
pub use conversation::Conversation;
pub use tools::{Tool, ToolError, ToolRegistry};
