//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Free usage limit reached. Please sign in to continue.")]
    QuotaExceeded,

    #[error("Unknown artifact type: {0}")]
    InvalidArtifactType(String),

    #[error("Unknown interaction mode: {0}")]
    InvalidMode(String),

    #[error("Unknown output tab: {0}")]
    InvalidOutputTab(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_exceeded_display() {
        let error = DomainError::QuotaExceeded;
        assert_eq!(
            error.to_string(),
            "Free usage limit reached. Please sign in to continue."
        );
    }

    #[test]
    fn test_parse_errors_name_the_input() {
        assert_eq!(
            DomainError::InvalidMode("voice".to_string()).to_string(),
            "Unknown interaction mode: voice"
        );
    }
}
