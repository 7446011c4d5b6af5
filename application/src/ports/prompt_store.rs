//! Prompt store ports.
//!
//! [`TelemetrySink`] is the write side: one [`PromptRecord`] per submission
//! by a signed-in user. [`PromptHistoryReader`] is the read side used by the
//! history listing.
//!
//! Writes are best-effort. The session dispatches them on a detached task
//! and only logs failures; they never change what the user sees.

use async_trait::async_trait;
use genie_domain::{PromptRecord, UserId};
use thiserror::Error;

/// Errors from the prompt store.
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Prompt store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt record serialization error: {0}")]
    Serialization(String),

    #[error("Prompt store unavailable: {0}")]
    Unavailable(String),
}

/// Write side of the prompt store.
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn record(&self, record: PromptRecord) -> Result<(), TelemetryError>;
}

/// Read side of the prompt store.
#[async_trait]
pub trait PromptHistoryReader: Send + Sync {
    /// All records for `user`, in any order.
    async fn records_for(&self, user: &UserId) -> Result<Vec<PromptRecord>, TelemetryError>;
}

/// No-op sink for tests and when telemetry is disabled.
pub struct NoTelemetry;

#[async_trait]
impl TelemetrySink for NoTelemetry {
    async fn record(&self, _record: PromptRecord) -> Result<(), TelemetryError> {
        Ok(())
    }
}
