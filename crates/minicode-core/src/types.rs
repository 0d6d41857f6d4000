//! Core types for Minicode: the transcript and wire format.
//!
//! These types model the OpenAI chat completions API format spoken by every
//! OpenAI-compatible endpoint (OpenRouter included). A transcript is a plain
//! `Vec<Turn>`; the gateway serializes it verbatim on every round.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Turns (OpenAI chat completions format)
// ─────────────────────────────────────────────

/// One entry of the conversation transcript.
///
/// Each variant maps to a `role` field value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role")]
pub enum Turn {
    #[serde(rename = "user")]
    User { content: String },

    #[serde(rename = "assistant")]
    Assistant {
        /// `null` on the wire when the model only requested tools.
        #[serde(default)]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },

    #[serde(rename = "tool")]
    Tool {
        content: String,
        tool_call_id: String,
    },
}

impl Turn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Turn::User {
            content: content.into(),
        }
    }

    /// Create an assistant turn with text content only.
    pub fn assistant(content: impl Into<String>) -> Self {
        Turn::Assistant {
            content: Some(content.into()),
            tool_calls: None,
        }
    }

    /// Create an assistant turn from optional text and a (possibly empty) list
    /// of tool calls. An empty list is stored as `None` so the field is omitted.
    pub fn assistant_with_calls(content: Option<String>, tool_calls: Vec<ToolCall>) -> Self {
        Turn::Assistant {
            content,
            tool_calls: if tool_calls.is_empty() {
                None
            } else {
                Some(tool_calls)
            },
        }
    }

    /// Create a tool result turn answering `tool_call_id`.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Turn::Tool {
            content: content.into(),
            tool_call_id: tool_call_id.into(),
        }
    }

    /// The role tag as it appears on the wire.
    pub fn role(&self) -> &'static str {
        match self {
            Turn::User { .. } => "user",
            Turn::Assistant { .. } => "assistant",
            Turn::Tool { .. } => "tool",
        }
    }

    /// Tool calls carried by an assistant turn (empty for every other role).
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Turn::Assistant {
                tool_calls: Some(calls),
                ..
            } => calls,
            _ => &[],
        }
    }
}

// ─────────────────────────────────────────────
// Tool Calls (function calling)
// ─────────────────────────────────────────────

/// A tool call from the assistant, requesting execution of a function.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    /// Server-assigned ID, echoed back in the matching tool turn.
    pub id: String,
    /// Always "function" in current OpenAI API.
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: FunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

impl ToolCall {
    /// Create a new tool call.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        ToolCall {
            id: id.into(),
            call_type: function_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// The function name and arguments within a tool call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments object, exactly as the model produced it.
    #[serde(default)]
    pub arguments: String,
}

// ─────────────────────────────────────────────
// Tool Definitions (for model requests)
// ─────────────────────────────────────────────

/// Definition of a tool, sent to the model so it knows what it may call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    /// Always "function".
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

/// Schema of a function tool.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

// ─────────────────────────────────────────────
// Assistant turn (decoded gateway reply)
// ─────────────────────────────────────────────

/// One assistant reply, as returned by a `ModelGateway`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssistantTurn {
    /// Text content (None if the model only requested tools).
    pub content: Option<String>,
    /// Tool calls in the order the model emitted them.
    pub tool_calls: Vec<ToolCall>,
    pub finish_reason: Option<String>,
    pub usage: Option<UsageInfo>,
}

impl AssistantTurn {
    /// A plain text reply with no tool calls.
    pub fn text(content: impl Into<String>) -> Self {
        AssistantTurn {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// A reply that only requests tools.
    pub fn calls(tool_calls: Vec<ToolCall>) -> Self {
        AssistantTurn {
            tool_calls,
            ..Default::default()
        }
    }

    /// Whether the reply requests any tool executions.
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }

    /// The transcript entry recorded for this reply.
    pub fn to_turn(&self) -> Turn {
        Turn::assistant_with_calls(self.content.clone(), self.tool_calls.clone())
    }
}

/// Token usage statistics reported by the endpoint. Missing counters read as zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UsageInfo {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// ─────────────────────────────────────────────
// Chat completion wire types
// ─────────────────────────────────────────────

/// Raw chat completion response from an OpenAI-compatible API.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    /// Absent and `null` both decode as no choices.
    #[serde(default)]
    pub choices: Option<Vec<ChatChoice>>,
    pub usage: Option<UsageInfo>,
}

/// A single choice in a chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

/// The assistant message within a chat completion choice.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl ChatCompletionResponse {
    /// Take the first choice as the assistant turn.
    ///
    /// Returns `None` when the endpoint sent zero choices.
    pub fn into_assistant_turn(self) -> Option<AssistantTurn> {
        let usage = self.usage;
        self.choices.into_iter().flatten().next().map(|c| AssistantTurn {
            content: c.message.content,
            tool_calls: c.message.tool_calls.unwrap_or_default(),
            finish_reason: c.finish_reason,
            usage,
        })
    }
}

/// Request body for an OpenAI-compatible chat completion API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Turn],
    #[serde(skip_serializing_if = "no_tools")]
    pub tools: &'a [ToolDefinition],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

fn no_tools(tools: &&[ToolDefinition]) -> bool {
    tools.is_empty()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Turn serialization ──

    #[test]
    fn test_user_turn_serialization() {
        let turn = Turn::user("what is 2+2");
        let json = serde_json::to_value(&turn).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "what is 2+2");
    }

    #[test]
    fn test_assistant_text_turn_serialization() {
        let turn = Turn::assistant("4");
        let json = serde_json::to_value(&turn).unwrap();

        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "4");
        assert!(json.get("tool_calls").is_none());
    }

    #[test]
    fn test_assistant_tool_calls_keep_null_content() {
        let turn = Turn::assistant_with_calls(
            None,
            vec![ToolCall::new("call_1", "Read", r#"{"file_path": "notes.txt"}"#)],
        );
        let json = serde_json::to_value(&turn).unwrap();

        assert_eq!(json["role"], "assistant");
        assert!(json["content"].is_null());
        let calls = json["tool_calls"].as_array().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0]["id"], "call_1");
        assert_eq!(calls[0]["type"], "function");
        assert_eq!(calls[0]["function"]["name"], "Read");
        assert_eq!(calls[0]["function"]["arguments"], r#"{"file_path": "notes.txt"}"#);
    }

    #[test]
    fn test_empty_call_list_is_omitted() {
        let turn = Turn::assistant_with_calls(Some("done".into()), Vec::new());
        assert_eq!(turn, Turn::assistant("done"));
        assert!(turn.tool_calls().is_empty());
    }

    #[test]
    fn test_tool_result_serialization() {
        let turn = Turn::tool_result("call_1", "hello from notes");
        let json = serde_json::to_value(&turn).unwrap();

        assert_eq!(json["role"], "tool");
        assert_eq!(json["content"], "hello from notes");
        assert_eq!(json["tool_call_id"], "call_1");
    }

    #[test]
    fn test_roles() {
        assert_eq!(Turn::user("a").role(), "user");
        assert_eq!(Turn::assistant("b").role(), "assistant");
        assert_eq!(Turn::tool_result("c", "d").role(), "tool");
    }

    #[test]
    fn test_assistant_deserialization_without_type_field() {
        let json = json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_abc",
                "function": { "name": "Bash", "arguments": "{\"command\": \"ls\"}" }
            }]
        });
        let turn: Turn = serde_json::from_value(json).unwrap();

        let calls = turn.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].call_type, "function");
        assert_eq!(calls[0].function.name, "Bash");
    }

    // ── ToolDefinition ──

    #[test]
    fn test_tool_definition_serialization() {
        let def = ToolDefinition::new(
            "Read",
            "Read and return the contents of a file",
            json!({
                "type": "object",
                "properties": { "file_path": { "type": "string" } },
                "required": ["file_path"]
            }),
        );
        let json = serde_json::to_value(&def).unwrap();

        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "Read");
        assert_eq!(json["function"]["parameters"]["required"][0], "file_path");
    }

    // ── ChatCompletionResponse → AssistantTurn ──

    #[test]
    fn test_response_with_text() {
        let api_json = json!({
            "id": "gen-1",
            "choices": [{
                "message": { "content": "4", "tool_calls": null },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11 }
        });

        let resp: ChatCompletionResponse = serde_json::from_value(api_json).unwrap();
        let turn = resp.into_assistant_turn().unwrap();

        assert_eq!(turn.content.as_deref(), Some("4"));
        assert!(!turn.has_tool_calls());
        assert_eq!(turn.finish_reason.as_deref(), Some("stop"));
        assert_eq!(turn.usage.unwrap().total_tokens, 11);
    }

    #[test]
    fn test_response_with_tool_calls() {
        let api_json = json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [
                        { "id": "a", "type": "function", "function": { "name": "Write", "arguments": "{}" } },
                        { "id": "b", "type": "function", "function": { "name": "Bash", "arguments": "{}" } }
                    ]
                },
                "finish_reason": "tool_calls"
            }]
        });

        let resp: ChatCompletionResponse = serde_json::from_value(api_json).unwrap();
        let turn = resp.into_assistant_turn().unwrap();

        assert!(turn.content.is_none());
        let ids: Vec<&str> = turn.tool_calls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_response_without_choices() {
        let resp: ChatCompletionResponse =
            serde_json::from_value(json!({ "id": "gen-empty", "choices": [] })).unwrap();
        assert!(resp.into_assistant_turn().is_none());

        let resp: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.into_assistant_turn().is_none());

        let resp: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": null })).unwrap();
        assert!(resp.into_assistant_turn().is_none());
    }

    #[test]
    fn test_partial_usage_decodes() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "content": "4" }, "finish_reason": "stop" }],
            "usage": { "prompt_tokens": 10, "total_tokens": 10 }
        }))
        .unwrap();
        let turn = resp.into_assistant_turn().unwrap();

        assert_eq!(turn.content.as_deref(), Some("4"));
        let usage = turn.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.completion_tokens, 0);
        assert_eq!(usage.total_tokens, 10);
    }

    #[test]
    fn test_assistant_turn_to_turn() {
        let reply = AssistantTurn::calls(vec![ToolCall::new("x", "Read", "{}")]);
        let turn = reply.to_turn();
        assert_eq!(turn.tool_calls().len(), 1);

        let reply = AssistantTurn::text("bye");
        assert_eq!(reply.to_turn(), Turn::assistant("bye"));
    }

    // ── ChatCompletionRequest serialization ──

    #[test]
    fn test_request_serialization_without_tools() {
        let messages = vec![Turn::user("Hello")];
        let request = ChatCompletionRequest {
            model: "anthropic/claude-haiku-4.5",
            messages: &messages,
            tools: &[],
            tool_choice: None,
            max_tokens: None,
            temperature: None,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "anthropic/claude-haiku-4.5");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert!(json.get("tools").is_none());
        assert!(json.get("tool_choice").is_none());
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_request_serialization_with_tools() {
        let messages = vec![Turn::user("Read notes.txt")];
        let tools = vec![ToolDefinition::new("Read", "Read a file", json!({"type": "object"}))];
        let request = ChatCompletionRequest {
            model: "m",
            messages: &messages,
            tools: &tools,
            tool_choice: Some("auto"),
            max_tokens: Some(1024),
            temperature: Some(0.2),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["tools"][0]["function"]["name"], "Read");
        assert_eq!(json["tool_choice"], "auto");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["temperature"], 0.2);
    }
}
