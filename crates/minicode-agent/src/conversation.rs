//! Conversation: the append-only transcript of one agent run.
//!
//! Pairing of tool calls and tool results is the agent loop's job; this type
//! only records turns in order.

use minicode_core::types::{AssistantTurn, Turn};

/// Ordered transcript of user, assistant and tool turns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Start a conversation seeded with the user's prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::user(prompt)],
        }
    }

    /// Append a turn at the end.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Record an assistant reply, tool calls included.
    pub fn add_assistant_turn(&mut self, reply: &AssistantTurn) {
        self.append(reply.to_turn());
    }

    /// Record the result of one tool call.
    pub fn add_tool_result(&mut self, tool_call_id: &str, result: impl Into<String>) {
        self.append(Turn::tool_result(tool_call_id, result));
    }

    /// Read-only view of every turn, oldest first.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Consume the conversation, yielding its turns.
    pub fn into_turns(self) -> Vec<Turn> {
        self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicode_core::types::ToolCall;

    #[test]
    fn test_seeded_with_prompt() {
        let conv = Conversation::new("what is 2+2");
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.snapshot(), &[Turn::user("what is 2+2")]);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut conv = Conversation::new("read notes");
        let reply = AssistantTurn::calls(vec![ToolCall::new("c1", "Read", "{}")]);
        conv.add_assistant_turn(&reply);
        conv.add_tool_result("c1", "contents");
        conv.append(Turn::assistant("done"));

        let roles: Vec<&str> = conv.snapshot().iter().map(Turn::role).collect();
        assert_eq!(roles, vec!["user", "assistant", "tool", "assistant"]);
        assert_eq!(conv.last(), Some(&Turn::assistant("done")));
    }

    #[test]
    fn test_snapshot_grows_monotonically() {
        let mut conv = Conversation::new("p");
        let before = conv.snapshot().to_vec();
        conv.append(Turn::assistant("a"));
        let after = conv.snapshot();
        assert_eq!(&after[..before.len()], before.as_slice());
        assert_eq!(after.len(), before.len() + 1);
    }

    #[test]
    fn test_into_turns() {
        let conv = Conversation::new("p");
        assert_eq!(conv.into_turns(), vec![Turn::user("p")]);
        assert!(Conversation::default().is_empty());
    }
}
