//! Core domain concepts shared across all subdomains.
//!
//! - [`artifact::ArtifactType`]: the infrastructure format being generated
//! - [`prompt::Prompt`]: a validated, non-blank user prompt
//! - [`error::DomainError`]: domain-level errors

pub mod artifact;
pub mod error;
pub mod prompt;
