//! Tool trait: the interface every agent tool implements.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use minicode_core::types::ToolDefinition;

use super::error::ToolError;

/// Parsed tool arguments, keyed by parameter name.
pub type ToolParams = HashMap<String, Value>;

// ─────────────────────────────────────────────
// Tool trait
// ─────────────────────────────────────────────

/// Every agent tool implements this trait.
///
/// The agent loop sends each tool's schema to the model via `to_definition()`
/// and dispatches the model's calls via `execute()`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses to call this tool (e.g. `"Read"`).
    fn name(&self) -> &str;

    /// Human-readable description shown to the model.
    fn description(&self) -> &str;

    /// JSON Schema describing the parameters.
    ///
    /// Must be `{"type": "object", "properties": {...}, "required": [...]}`.
    fn parameters(&self) -> Value;

    /// Execute the tool with already-parsed arguments.
    ///
    /// The returned text is what the model reads. Failures are returned as
    /// `Err` and turned into result text by the registry.
    async fn execute(&self, params: &ToolParams) -> Result<String, ToolError>;

    /// Build the `ToolDefinition` sent to the model.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.parameters())
    }
}

// ─────────────────────────────────────────────
// Param helpers
// ─────────────────────────────────────────────

/// Parse the JSON-encoded arguments of a tool call.
///
/// Blank text is treated as an empty object; anything else must be a JSON
/// object.
pub fn parse_arguments(raw: &str) -> Result<ToolParams, ToolError> {
    if raw.trim().is_empty() {
        return Ok(ToolParams::new());
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
        Ok(other) => Err(ToolError::InvalidArguments(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ToolError::InvalidArguments(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extract a required string param.
pub fn require_string<'a>(params: &'a ToolParams, key: &str) -> Result<&'a str, ToolError> {
    match params.get(key) {
        None => Err(ToolError::MissingParameter(key.to_string())),
        Some(value) => value
            .as_str()
            .ok_or_else(|| ToolError::NotAString(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_arguments_object() {
        let params = parse_arguments(r#"{"file_path": "notes.txt"}"#).unwrap();
        assert_eq!(params.get("file_path"), Some(&json!("notes.txt")));
    }

    #[test]
    fn test_parse_arguments_blank() {
        assert!(parse_arguments("").unwrap().is_empty());
        assert!(parse_arguments("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_arguments_malformed() {
        let err = parse_arguments(r#"{"file_path": "#).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_result_text().starts_with("Error: invalid arguments"));
    }

    #[test]
    fn test_parse_arguments_not_an_object() {
        let err = parse_arguments("[1, 2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid arguments: expected a JSON object, got an array"
        );
    }

    #[test]
    fn test_require_string_present() {
        let mut params = ToolParams::new();
        params.insert("command".into(), json!("ls"));
        assert_eq!(require_string(&params, "command").unwrap(), "ls");
    }

    #[test]
    fn test_require_string_missing() {
        let err = require_string(&ToolParams::new(), "command").unwrap_err();
        assert_eq!(err.to_string(), "missing required parameter: command");
    }

    #[test]
    fn test_require_string_wrong_type() {
        let mut params = ToolParams::new();
        params.insert("file_path".into(), json!(42));
        let err = require_string(&params, "file_path").unwrap_err();
        assert!(matches!(err, ToolError::NotAString(ref p) if p == "file_path"));
        assert_eq!(err.to_string(), "expected string for parameter: file_path");
    }

    /// Verify the default `to_definition()` produces the right shape.
    #[test]
    fn test_to_definition_default() {
        struct DummyTool;

        #[async_trait]
        impl Tool for DummyTool {
            fn name(&self) -> &str { "Dummy" }
            fn description(&self) -> &str { "A test tool" }
            fn parameters(&self) -> Value {
                json!({
                    "type": "object",
                    "properties": { "msg": { "type": "string" } },
                    "required": ["msg"]
                })
            }
            async fn execute(&self, _params: &ToolParams) -> Result<String, ToolError> {
                Ok("ok".into())
            }
        }

        let def = DummyTool.to_definition();
        assert_eq!(def.function.name, "Dummy");
        assert_eq!(def.function.description, "A test tool");
        assert_eq!(def.tool_type, "function");
    }
}
