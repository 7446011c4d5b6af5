//! Application layer for infragenie
//!
//! This crate contains the prompt session orchestrator, the anonymous quota
//! gate, secondary use cases, and the port definitions that infrastructure
//! adapters implement. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod quota_gate;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    identity_provider::{AnonymousIdentity, FixedIdentity, IdentityProvider},
    prompt_store::{NoTelemetry, PromptHistoryReader, TelemetryError, TelemetrySink},
    quota_store::{InMemoryQuotaStore, QuotaStore, QuotaStoreError},
    request_dispatcher::{NetworkError, RequestDispatcher},
    session_observer::{NoSessionObserver, SessionObserver},
};
pub use quota_gate::QuotaGate;
pub use use_cases::check_errors::{CheckErrorsError, CheckErrorsUseCase, NO_CORRECTIONS};
pub use use_cases::prompt_history::PromptHistoryUseCase;
pub use use_cases::prompt_session::{PromptSession, PromptSessionError, SubmitOutcome};
