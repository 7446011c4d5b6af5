//! Anonymous usage gate.
//!
//! Decides whether a submission may proceed and keeps the client-local
//! counter in step with that decision.

use crate::ports::quota_store::QuotaStore;
use genie_domain::{QuotaDecision, QuotaPolicy, UserId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Meters anonymous submissions against a [`QuotaPolicy`].
///
/// Signed-in users are never metered. The first check after a user signs in
/// clears the stored counter; later checks for the same user leave storage
/// alone.
pub struct QuotaGate {
    policy: QuotaPolicy,
    store: Arc<dyn QuotaStore>,
    cleared_for: Option<UserId>,
}

impl QuotaGate {
    pub fn new(policy: QuotaPolicy, store: Arc<dyn QuotaStore>) -> Self {
        Self {
            policy,
            store,
            cleared_for: None,
        }
    }

    /// Check one submission.
    ///
    /// For an anonymous user an allowed submission is charged immediately,
    /// before anything is dispatched, so a failed request still counts.
    pub fn check(&mut self, identity: Option<&UserId>) -> QuotaDecision {
        match identity {
            Some(user) => {
                self.clear_once(user);
                QuotaDecision::Allow
            }
            None => {
                self.cleared_for = None;
                let count = self.usage();
                let decision = self.policy.evaluate(count);
                if decision.is_allowed() {
                    if let Err(e) = self.store.set(count.saturating_add(1)) {
                        warn!("Failed to persist quota counter: {}", e);
                    }
                }
                debug!(count, ceiling = self.policy.ceiling, ?decision, "Quota check");
                decision
            }
        }
    }

    /// Completed anonymous submissions. Unreadable storage counts as zero.
    pub fn usage(&self) -> u32 {
        match self.store.get() {
            Ok(count) => count,
            Err(e) => {
                warn!("Failed to read quota counter, treating as 0: {}", e);
                0
            }
        }
    }

    /// Anonymous submissions left before the ceiling.
    pub fn remaining(&self) -> u32 {
        self.policy.ceiling.saturating_sub(self.usage())
    }

    fn clear_once(&mut self, user: &UserId) {
        if self.cleared_for.as_ref() == Some(user) {
            return;
        }
        match self.store.clear() {
            Ok(()) => {
                debug!(user = %user, "Cleared anonymous quota counter");
                self.cleared_for = Some(user.clone());
            }
            Err(e) => warn!("Failed to clear quota counter: {}", e),
        }
    }
}
