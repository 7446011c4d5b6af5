//! Configuration file loading for infragenie
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GENIE_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./genie.toml` or `./.genie.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/infragenie/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileQuotaConfig, FileTelemetryConfig,
};
pub use loader::ConfigLoader;
