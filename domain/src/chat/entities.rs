//! Chat domain entities

use serde::{Deserialize, Serialize};

/// Shown in place of the assistant reply when a chat exchange fails.
pub const CHAT_ERROR_PLACEHOLDER: &str = "Sorry, something went wrong. Please try again.";

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A turn in a conversation (Entity)
///
/// Serializes as `{"role": "user", "content": "..."}`, the shape the chat
/// endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Assistant turn standing in for a failed reply.
    pub fn error_placeholder() -> Self {
        Self::assistant(CHAT_ERROR_PLACEHOLDER)
    }

    pub fn is_error_placeholder(&self) -> bool {
        self.role == Role::Assistant && self.content == CHAT_ERROR_PLACEHOLDER
    }
}

/// Ordered transcript of a chat session (Entity)
///
/// Turns are never reordered or deduplicated; rendering order is storage
/// order. The session appends whole exchanges so that after `n` exchanges
/// there are exactly `2n` turns alternating User, Assistant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single turn.
    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Append a User turn followed by its Assistant reply.
    pub fn append_exchange(&mut self, user: ChatTurn, assistant: ChatTurn) {
        debug_assert_eq!(user.role, Role::User);
        debug_assert_eq!(assistant.role, Role::Assistant);
        self.turns.push(user);
        self.turns.push(assistant);
    }

    pub fn as_ordered_sequence(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// The transcript to send with a new user turn: prior history plus it.
    pub fn with_pending(&self, pending: ChatTurn) -> Vec<ChatTurn> {
        let mut messages = Vec::with_capacity(self.turns.len() + 1);
        messages.extend(self.turns.iter().cloned());
        messages.push(pending);
        messages
    }

    pub fn last_assistant(&self) -> Option<&ChatTurn> {
        self.turns.iter().rev().find(|t| t.role == Role::Assistant)
    }

    /// Latest real assistant reply, skipping failed-exchange placeholders.
    pub fn last_reply(&self) -> Option<&ChatTurn> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == Role::Assistant && !t.is_error_placeholder())
    }

    /// Number of completed exchanges.
    pub fn exchange_count(&self) -> usize {
        self.turns.len() / 2
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Whether the transcript alternates User, Assistant and has even length.
    pub fn is_well_formed(&self) -> bool {
        self.turns.len() % 2 == 0
            && self.turns.iter().enumerate().all(|(i, turn)| {
                let expected = if i % 2 == 0 {
                    Role::User
                } else {
                    Role::Assistant
                };
                turn.role == expected
            })
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_exchange_keeps_alternation() {
        let mut history = ChatHistory::new();
        history.append_exchange(ChatTurn::user("hi"), ChatTurn::assistant("hello"));
        history.append_exchange(ChatTurn::user("more"), ChatTurn::error_placeholder());

        let roles: Vec<Role> = history
            .as_ordered_sequence()
            .iter()
            .map(|t| t.role)
            .collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert!(history.is_well_formed());
        assert_eq!(history.exchange_count(), 2);
    }

    #[test]
    fn test_with_pending_appends_without_mutating() {
        let mut history = ChatHistory::new();
        history.append_exchange(ChatTurn::user("a"), ChatTurn::assistant("b"));

        let messages = history.with_pending(ChatTurn::user("c"));
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2], ChatTurn::user("c"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_single_user_turn_is_not_well_formed() {
        let mut history = ChatHistory::new();
        history.append(ChatTurn::user("dangling"));
        assert!(!history.is_well_formed());
    }

    #[test]
    fn test_last_assistant() {
        let mut history = ChatHistory::new();
        assert!(history.last_assistant().is_none());
        history.append_exchange(ChatTurn::user("a"), ChatTurn::assistant("first"));
        history.append_exchange(ChatTurn::user("b"), ChatTurn::assistant("second"));
        assert_eq!(history.last_assistant().unwrap().content, "second");
    }

    #[test]
    fn test_last_reply_skips_placeholders() {
        let mut history = ChatHistory::new();
        history.append_exchange(ChatTurn::user("a"), ChatTurn::error_placeholder());
        assert!(history.last_reply().is_none());

        history.append_exchange(ChatTurn::user("b"), ChatTurn::assistant("good"));
        history.append_exchange(ChatTurn::user("c"), ChatTurn::error_placeholder());
        assert_eq!(history.last_reply().unwrap().content, "good");
        assert!(history.last_assistant().unwrap().is_error_placeholder());
    }

    #[test]
    fn test_turn_wire_shape() {
        let json = serde_json::to_value(ChatTurn::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
