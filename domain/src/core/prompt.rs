//! Prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user prompt to be sent to the backend (Value Object)
///
/// Blank input never reaches the quota gate or the network; it is
/// rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Try to create a new prompt, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyPrompt)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_creation() {
        let p = Prompt::try_new("Create a Deployment for nginx").unwrap();
        assert_eq!(p.content(), "Create a Deployment for nginx");
    }

    #[test]
    fn test_prompt_keeps_surrounding_whitespace() {
        let p = Prompt::try_new("  nginx  ").unwrap();
        assert_eq!(p.content(), "  nginx  ");
    }

    #[test]
    fn test_blank_prompt_rejected() {
        assert_eq!(Prompt::try_new(""), Err(DomainError::EmptyPrompt));
        assert_eq!(Prompt::try_new(" \n\t"), Err(DomainError::EmptyPrompt));
    }
}
