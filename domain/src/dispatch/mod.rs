//! Backend requests and raw responses (Value Objects).
//!
//! The backend is stateless: a [`DispatchRequest::Chat`] carries the whole
//! transcript every time.

use crate::chat::entities::{ChatHistory, ChatTurn};
use crate::core::artifact::ArtifactType;
use crate::core::prompt::Prompt;
use crate::interaction::mode::InteractionMode;

/// A fully built request, ready to be sent as-is (and re-sent on retry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchRequest {
    /// `POST /generate`
    Command {
        prompt: String,
        artifact: ArtifactType,
    },
    /// `POST /chat`
    Chat {
        messages: Vec<ChatTurn>,
        artifact: ArtifactType,
    },
    /// `POST /check-error`
    CheckErrors {
        code: String,
        artifact: ArtifactType,
    },
}

impl DispatchRequest {
    pub fn command(prompt: &Prompt, artifact: ArtifactType) -> Self {
        DispatchRequest::Command {
            prompt: prompt.content().to_string(),
            artifact,
        }
    }

    /// Prior history plus the new user turn.
    pub fn chat(history: &ChatHistory, prompt: &Prompt, artifact: ArtifactType) -> Self {
        DispatchRequest::Chat {
            messages: history.with_pending(ChatTurn::user(prompt.content())),
            artifact,
        }
    }

    pub fn check_errors(code: impl Into<String>, artifact: ArtifactType) -> Self {
        DispatchRequest::CheckErrors {
            code: code.into(),
            artifact,
        }
    }

    /// Path of the backend endpoint serving this request.
    pub fn endpoint(&self) -> &'static str {
        match self {
            DispatchRequest::Command { .. } => "/generate",
            DispatchRequest::Chat { .. } => "/chat",
            DispatchRequest::CheckErrors { .. } => "/check-error",
        }
    }

    pub fn artifact(&self) -> &ArtifactType {
        match self {
            DispatchRequest::Command { artifact, .. }
            | DispatchRequest::Chat { artifact, .. }
            | DispatchRequest::CheckErrors { artifact, .. } => artifact,
        }
    }

    /// Interaction mode, for the two prompt-driven requests.
    pub fn mode(&self) -> Option<InteractionMode> {
        match self {
            DispatchRequest::Command { .. } => Some(InteractionMode::Command),
            DispatchRequest::Chat { .. } => Some(InteractionMode::Chat),
            DispatchRequest::CheckErrors { .. } => None,
        }
    }
}

/// Decoded backend body, one variant per endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    /// `code` is already joined when the backend sent a list of lines.
    Command {
        code: String,
        explanation: Option<String>,
    },
    Chat {
        response: String,
    },
    Corrected {
        corrected: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(s: &str) -> Prompt {
        Prompt::try_new(s).unwrap()
    }

    #[test]
    fn test_command_request() {
        let request = DispatchRequest::command(&prompt("nginx"), ArtifactType::Kubernetes);
        assert_eq!(request.endpoint(), "/generate");
        assert_eq!(request.mode(), Some(InteractionMode::Command));
        assert_eq!(request.artifact(), &ArtifactType::Kubernetes);
    }

    #[test]
    fn test_chat_request_carries_full_history() {
        let mut history = ChatHistory::new();
        history.append_exchange(ChatTurn::user("a"), ChatTurn::assistant("b"));

        let request = DispatchRequest::chat(&history, &prompt("c"), ArtifactType::Terraform);
        match &request {
            DispatchRequest::Chat { messages, .. } => {
                assert_eq!(
                    messages,
                    &vec![
                        ChatTurn::user("a"),
                        ChatTurn::assistant("b"),
                        ChatTurn::user("c")
                    ]
                );
            }
            other => panic!("unexpected request: {other:?}"),
        }
        assert_eq!(request.endpoint(), "/chat");
    }

    #[test]
    fn test_check_errors_has_no_mode() {
        let request = DispatchRequest::check_errors("FROM x", ArtifactType::Dockerfile);
        assert_eq!(request.endpoint(), "/check-error");
        assert_eq!(request.mode(), None);
    }
}
