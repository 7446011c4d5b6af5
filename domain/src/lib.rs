//! Domain layer for infragenie
//!
//! This crate contains the core rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Interaction modes
//!
//! - **Command**: single-shot generation of an artifact plus an explanation
//! - **Chat**: multi-turn exchange; the full transcript is resent every turn
//!
//! ## Anonymous quota
//!
//! Anonymous users get a fixed number of free submissions
//! ([`QuotaPolicy`]). Signed-in users are unmetered.
//!
//! ## Fenced block extraction
//!
//! Backend text is reduced to the interior of its first fenced block
//! ([`extract_code`]).

pub mod chat;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod extraction;
pub mod identity;
pub mod interaction;
pub mod quota;
pub mod telemetry;
pub mod util;

// Re-export commonly used types
pub use chat::entities::{ChatHistory, ChatTurn, Role};
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{artifact::ArtifactType, error::DomainError, prompt::Prompt};
pub use dispatch::{DispatchRequest, RawResponse};
pub use extraction::{
    CommandResult, DownloadArtifact, EMPTY_CODE_ADVISORY, MISSING_EXPLANATION, OutputTab,
    explanation_or_default, extract_code,
};
pub use identity::UserId;
pub use interaction::{mode::InteractionMode, view_state::ViewState};
pub use quota::policy::{QuotaDecision, QuotaPolicy};
pub use telemetry::PromptRecord;
