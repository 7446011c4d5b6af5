//! Prompt session behavior configuration.

use genie_domain::QuotaPolicy;
use std::time::Duration;

/// Default delay between a quota denial and the redirect to sign-in.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2500);

/// Controls how a [`PromptSession`](crate::PromptSession) behaves.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Free-tier policy applied to anonymous users.
    pub quota: QuotaPolicy,
    /// How long the denial notice stays up before redirecting to sign-in.
    pub redirect_delay: Duration,
    /// Record successful prompts as well as failed ones.
    pub record_success: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quota: QuotaPolicy::default(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            record_success: true,
        }
    }
}

impl SessionConfig {
    pub fn with_quota(mut self, quota: QuotaPolicy) -> Self {
        self.quota = quota;
        self
    }

    /// Creates a config with the redirect delay given in milliseconds.
    pub fn with_redirect_delay_ms(mut self, millis: u64) -> Self {
        self.redirect_delay = Duration::from_millis(millis);
        self
    }

    pub fn with_record_success(mut self, record: bool) -> Self {
        self.record_success = record;
        self
    }
}
