//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! needed.

mod backend;
mod logging;
mod output;
mod quota;
mod telemetry;

pub use backend::FileBackendConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use quota::FileQuotaConfig;
pub use telemetry::FileTelemetryConfig;

use genie_application::SessionConfig;
use genie_domain::{ConfigIssue, ConfigIssueCode, QuotaPolicy, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when the configuration has fatal issues.
#[derive(Debug, Error)]
#[error("invalid configuration: {}", .messages.join("; "))]
pub struct ConfigValidationError {
    pub messages: Vec<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend endpoint settings
    pub backend: FileBackendConfig,
    /// Anonymous quota settings
    pub quota: FileQuotaConfig,
    /// Prompt telemetry settings
    pub telemetry: FileTelemetryConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. An empty backend base URL (error)
    /// 2. A zero quota ceiling (warning: every anonymous prompt is denied)
    /// 3. Warning checkpoints that can never fire (warning)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.backend.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyBaseUrl,
                "backend.base_url cannot be empty",
            ));
        }

        if self.quota.ceiling == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroQuotaCeiling,
                "quota.ceiling is 0: anonymous prompts will always be denied",
            ));
        }

        for &checkpoint in &self.quota.warn_at {
            if checkpoint >= self.quota.ceiling {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnreachableWarning {
                        checkpoint,
                        ceiling: self.quota.ceiling,
                    },
                    format!(
                        "quota.warn_at: {} is not below the ceiling {} and will never fire",
                        checkpoint, self.quota.ceiling
                    ),
                ));
            }
        }

        issues
    }

    /// Validate and fail on errors, returning the remaining warnings.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let issues = self.validate();
        if ConfigIssue::has_errors(&issues) {
            return Err(ConfigValidationError {
                messages: issues
                    .iter()
                    .filter(|i| i.severity == Severity::Error)
                    .map(|i| i.message.clone())
                    .collect(),
            });
        }
        Ok(issues)
    }

    /// Session behavior derived from the `[quota]` and `[telemetry]` sections.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_quota(QuotaPolicy::new(
                self.quota.ceiling,
                self.quota.warn_at.clone(),
            ))
            .with_redirect_delay_ms(self.quota.redirect_delay_ms)
            .with_record_success(self.telemetry.record_success)
    }
}
