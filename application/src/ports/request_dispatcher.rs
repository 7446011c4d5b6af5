//! Request dispatcher port
//!
//! Defines the interface for sending a built request to the generative
//! backend.

use async_trait::async_trait;
use genie_domain::{DispatchRequest, RawResponse};
use thiserror::Error;

/// Any failure between sending a request and decoding its body.
///
/// Transport failures, non-2xx statuses and malformed bodies all collapse
/// into this one type; the message is for diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Network error: {message}")]
pub struct NetworkError {
    message: String,
}

impl NetworkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The request never produced a response.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("request failed: {}", cause))
    }

    /// The backend answered with a non-success status.
    pub fn status(code: u16, body: &str) -> Self {
        if body.trim().is_empty() {
            Self::new(format!("HTTP {}", code))
        } else {
            Self::new(format!("HTTP {}: {}", code, body.trim()))
        }
    }

    /// The body could not be decoded into the expected shape.
    pub fn malformed(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("malformed response body: {}", cause))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Sends one request to the backend.
///
/// Implementations make exactly one network call per `send` and never
/// retry on their own; retrying is a user action handled by the session.
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    async fn send(&self, request: &DispatchRequest) -> Result<RawResponse, NetworkError>;
}
