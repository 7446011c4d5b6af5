//! Backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL the endpoint paths are appended to
    pub base_url: String,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}
