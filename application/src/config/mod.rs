//! Application-level configuration.
//!
//! - [`SessionConfig`]: quota policy, auth redirect delay, telemetry switches

pub mod session_config;

pub use session_config::SessionConfig;
