//! Check errors use case.
//!
//! Sends a pasted artifact to the backend and returns its corrected form.
//! Unlike prompt submissions this is not quota-gated and leaves no history.

use crate::ports::request_dispatcher::{NetworkError, RequestDispatcher};
use genie_domain::util::log_preview;
use genie_domain::{ArtifactType, DispatchRequest, RawResponse};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Shown when the backend returns nothing to correct.
pub const NO_CORRECTIONS: &str = "No corrections found.";

/// Errors that can occur while checking an artifact.
#[derive(Error, Debug)]
pub enum CheckErrorsError {
    #[error("Nothing to check: the input is empty")]
    EmptyCode,

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Use case for correcting a user-supplied artifact.
pub struct CheckErrorsUseCase {
    dispatcher: Arc<dyn RequestDispatcher>,
}

impl CheckErrorsUseCase {
    pub fn new(dispatcher: Arc<dyn RequestDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Returns the backend's reply trimmed, or [`NO_CORRECTIONS`].
    ///
    /// The reply is kept whole: fix notes outside the fenced block are part
    /// of the answer.
    pub async fn execute(
        &self,
        code: &str,
        artifact: ArtifactType,
    ) -> Result<String, CheckErrorsError> {
        if code.trim().is_empty() {
            return Err(CheckErrorsError::EmptyCode);
        }
        info!(artifact = %artifact, "Checking artifact: {}", log_preview(code, 60));

        let request = DispatchRequest::check_errors(code, artifact);
        let corrected = match self.dispatcher.send(&request).await? {
            RawResponse::Corrected { corrected } => corrected,
            other => {
                return Err(NetworkError::malformed(format!(
                    "unexpected response for {}: {:?}",
                    request.endpoint(),
                    other
                ))
                .into());
            }
        };

        let corrected = corrected.trim();
        if corrected.is_empty() {
            debug!("Backend returned no corrections");
            Ok(NO_CORRECTIONS.to_string())
        } else {
            Ok(corrected.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MockDispatcher {
        responses: Mutex<VecDeque<Result<RawResponse, NetworkError>>>,
        calls: Mutex<usize>,
    }

    impl MockDispatcher {
        fn new(responses: Vec<Result<RawResponse, NetworkError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl RequestDispatcher for MockDispatcher {
        async fn send(&self, request: &DispatchRequest) -> Result<RawResponse, NetworkError> {
            assert_eq!(request.endpoint(), "/check-error");
            *self.calls.lock().unwrap() += 1;
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(NetworkError::new("No more responses")))
        }
    }

    fn corrected(text: &str) -> Result<RawResponse, NetworkError> {
        Ok(RawResponse::Corrected {
            corrected: text.to_string(),
        })
    }

    #[tokio::test]
    async fn test_returns_corrected_code() {
        let dispatcher = Arc::new(MockDispatcher::new(vec![corrected(
            "\n```dockerfile\nFROM alpine:3.20\n```\n",
        )]));
        let use_case = CheckErrorsUseCase::new(dispatcher);

        let result = use_case
            .execute("FROM alpine:", ArtifactType::Dockerfile)
            .await
            .unwrap();
        assert_eq!(result, "```dockerfile\nFROM alpine:3.20\n```");
    }

    #[tokio::test]
    async fn test_fix_notes_outside_fence_are_kept() {
        let reply = "Missing tag on the base image.\n```dockerfile\n# pinned tag\nFROM alpine:3.20\n```\nRebuild after the change.";
        let dispatcher = Arc::new(MockDispatcher::new(vec![corrected(reply)]));
        let use_case = CheckErrorsUseCase::new(dispatcher);

        let result = use_case
            .execute("FROM alpine:", ArtifactType::Dockerfile)
            .await
            .unwrap();
        assert_eq!(result, reply);
    }

    #[tokio::test]
    async fn test_empty_correction() {
        let dispatcher = Arc::new(MockDispatcher::new(vec![corrected("  ")]));
        let use_case = CheckErrorsUseCase::new(dispatcher);

        let result = use_case
            .execute("resource {}", ArtifactType::Terraform)
            .await
            .unwrap();
        assert_eq!(result, NO_CORRECTIONS);
    }

    #[tokio::test]
    async fn test_blank_code_rejected_before_dispatch() {
        let dispatcher = Arc::new(MockDispatcher::new(vec![]));
        let use_case = CheckErrorsUseCase::new(dispatcher.clone());

        let err = use_case
            .execute(" \n", ArtifactType::Kubernetes)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckErrorsError::EmptyCode));
        assert_eq!(*dispatcher.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let dispatcher = Arc::new(MockDispatcher::new(vec![Err(NetworkError::status(
            502, "",
        ))]));
        let use_case = CheckErrorsUseCase::new(dispatcher);

        let err = use_case
            .execute("kind: Pod", ArtifactType::Kubernetes)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Network error: HTTP 502");
    }
}
