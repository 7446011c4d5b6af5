//! Identity value objects.
//!
//! Identity management lives outside this crate; the core only needs to
//! know whether a signed-in user is present and who it is.

use serde::{Deserialize, Serialize};

/// Identifier of a signed-in user (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Returns `None` for a blank id.
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_trims() {
        assert_eq!(UserId::try_new(" u-1 ").unwrap().as_str(), "u-1");
    }

    #[test]
    fn test_blank_user_id_rejected() {
        assert!(UserId::try_new("  ").is_none());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&UserId::try_new("abc").unwrap()).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
