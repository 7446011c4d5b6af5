//! Interaction mode value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a prompt is submitted to the backend.
///
/// The two modes are mutually exclusive within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Single-shot generation: `POST /generate`, one artifact plus explanation.
    #[default]
    Command,
    /// Multi-turn conversation: `POST /chat` with the whole transcript.
    Chat,
}

impl InteractionMode {
    /// Returns the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Command => "command",
            InteractionMode::Chat => "chat",
        }
    }

    /// Whether this mode keeps a conversation transcript.
    pub fn keeps_history(&self) -> bool {
        matches!(self, InteractionMode::Chat)
    }
}

impl std::str::FromStr for InteractionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "command" | "cmd" => Ok(InteractionMode::Command),
            "chat" => Ok(InteractionMode::Chat),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_command() {
        assert_eq!(InteractionMode::default(), InteractionMode::Command);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Chat".parse::<InteractionMode>().unwrap(),
            InteractionMode::Chat
        );
        assert_eq!(
            "cmd".parse::<InteractionMode>().unwrap(),
            InteractionMode::Command
        );
        assert!("agent".parse::<InteractionMode>().is_err());
    }

    #[test]
    fn test_keeps_history() {
        assert!(InteractionMode::Chat.keeps_history());
        assert!(!InteractionMode::Command.keeps_history());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&InteractionMode::Command).unwrap();
        assert_eq!(json, "\"command\"");
    }
}
