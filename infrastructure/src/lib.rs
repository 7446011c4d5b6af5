//! Infrastructure layer for infragenie
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;
pub mod identity;
pub mod paths;
pub mod prompt_store;
pub mod quota;

// Re-export commonly used types
pub use backend::HttpRequestDispatcher;
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileQuotaConfig, FileTelemetryConfig,
};
pub use identity::{FileIdentityProvider, IdentityError};
pub use prompt_store::JsonlPromptStore;
pub use quota::FileQuotaStore;
