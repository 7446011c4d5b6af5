//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod identity_provider;
pub mod prompt_store;
pub mod quota_store;
pub mod request_dispatcher;
pub mod session_observer;
