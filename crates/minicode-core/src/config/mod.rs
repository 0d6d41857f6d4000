//! Configuration: gateway settings sourced from the process environment.
//!
//! # Usage
//! ```no_run
//! use minicode_core::config;
//!
//! let cfg = config::load_config().expect("OPENROUTER_API_KEY must be set");
//! println!("Model: {}", cfg.model);
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{load_config, load_config_with};
pub use schema::{ConfigError, GatewayConfig};
