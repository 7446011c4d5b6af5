//! Quota configuration from TOML (`[quota]` section)

use crate::quota::DEFAULT_SCOPE;
use genie_application::config::session_config::DEFAULT_REDIRECT_DELAY;
use genie_domain::quota::policy::{DEFAULT_CEILING, DEFAULT_WARN_AT};
use serde::{Deserialize, Serialize};

/// Raw quota configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuotaConfig {
    /// Free anonymous submissions
    pub ceiling: u32,
    /// Completed-submission counts at which a warning is shown
    pub warn_at: Vec<u32>,
    /// Delay between the denial notice and the sign-in redirect
    pub redirect_delay_ms: u64,
    /// Key of the anonymous counter in the quota file
    pub scope: String,
    /// Quota file location (defaults to the data directory)
    pub path: Option<std::path::PathBuf>,
}

impl Default for FileQuotaConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            warn_at: DEFAULT_WARN_AT.to_vec(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY.as_millis() as u64,
            scope: DEFAULT_SCOPE.to_string(),
            path: None,
        }
    }
}
