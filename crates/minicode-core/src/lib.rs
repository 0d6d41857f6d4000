//! Minicode Core: transcript types, wire format, and configuration.
//!
//! This crate contains:
//! - **types**: `Turn`, `ToolCall`, `ToolDefinition`, chat completion request/response
//! - **config**: `GatewayConfig` and its environment loader

pub mod config;
pub mod types;

pub use config::{ConfigError, GatewayConfig};
pub use types::{AssistantTurn, ToolCall, ToolDefinition, Turn};
