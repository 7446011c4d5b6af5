//! Telemetry configuration from TOML (`[telemetry]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw telemetry configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTelemetryConfig {
    /// Record prompts of signed-in users
    pub enabled: bool,
    /// Record successful prompts too, not only failures
    pub record_success: bool,
    /// Prompt store location (defaults to the data directory)
    pub path: Option<PathBuf>,
}

impl Default for FileTelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            record_success: true,
            path: None,
        }
    }
}
