//! Model gateway layer for Minicode.
//!
//! # Architecture
//!
//! - [`traits::ModelGateway`]: the boundary the agent loop talks to
//! - [`http_gateway::HttpGateway`]: OpenAI-compatible `/chat/completions` client
//! - [`error::GatewayError`]: every way a model call can fail (all fatal)

pub mod error;
pub mod http_gateway;
pub mod traits;

// Re-export main types for convenience
pub use error::GatewayError;
pub use http_gateway::HttpGateway;
pub use traits::ModelGateway;
