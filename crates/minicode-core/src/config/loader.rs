//! Config loader: builds a [`GatewayConfig`] from environment variables.
//!
//! # Loading precedence
//! 1. Defaults (from `GatewayConfig::default()`)
//! 2. Environment variables (override defaults)
//!
//! Supported variables:
//! - `OPENROUTER_API_KEY` → `api_key` (required)
//! - `OPENROUTER_BASE_URL` → `api_base`
//! - `MINICODE_MODEL` → `model`
//! - `MINICODE_MAX_TOKENS` → `max_tokens`
//! - `MINICODE_TEMPERATURE` → `temperature`

use tracing::{debug, warn};

use super::schema::{ConfigError, GatewayConfig};

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const BASE_URL_VAR: &str = "OPENROUTER_BASE_URL";
pub const MODEL_VAR: &str = "MINICODE_MODEL";
pub const MAX_TOKENS_VAR: &str = "MINICODE_MAX_TOKENS";
pub const TEMPERATURE_VAR: &str = "MINICODE_TEMPERATURE";

/// Load configuration from the process environment.
pub fn load_config() -> Result<GatewayConfig, ConfigError> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Empty values count as unset.
pub fn load_config_with<F>(lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = GatewayConfig::default();

    config.api_key =
        var(API_KEY_VAR).ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_VAR.into()))?;

    if let Some(val) = var(BASE_URL_VAR) {
        config.api_base = val;
    }
    if let Some(val) = var(MODEL_VAR) {
        config.model = val;
    }
    if let Some(val) = var(MAX_TOKENS_VAR) {
        match val.parse::<u32>() {
            Ok(n) => config.max_tokens = Some(n),
            Err(e) => {
                warn!(var = MAX_TOKENS_VAR, value = %val, error = %e, "ignoring invalid value")
            }
        }
    }
    if let Some(val) = var(TEMPERATURE_VAR) {
        match val.parse::<f64>() {
            Ok(t) => config.temperature = Some(t),
            Err(e) => {
                warn!(var = TEMPERATURE_VAR, value = %val, error = %e, "ignoring invalid value")
            }
        }
    }

    debug!(api_base = %config.api_base, model = %config.model, "loaded gateway config");
    Ok(config)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
