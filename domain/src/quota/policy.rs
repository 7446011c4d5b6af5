//! Free-tier quota policy (Value Object)

use serde::{Deserialize, Serialize};

/// Default number of anonymous submissions before sign-in is required.
pub const DEFAULT_CEILING: u32 = 10;

/// Default warning checkpoints: completed submissions before this one.
pub const DEFAULT_WARN_AT: [u32; 2] = [7, 9];

/// Outcome of checking a submission against the quota.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaDecision {
    Allow,
    /// Allowed, but the user should see how many free prompts remain.
    AllowWithWarning(String),
    Deny,
}

impl QuotaDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, QuotaDecision::Deny)
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            QuotaDecision::AllowWithWarning(message) => Some(message),
            _ => None,
        }
    }
}

/// Free-tier policy for anonymous users.
///
/// `count` is the number of submissions already made. A submission is
/// denied once `count >= ceiling`; it carries a warning when `count` is one
/// of the checkpoints in `warn_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaPolicy {
    pub ceiling: u32,
    pub warn_at: Vec<u32>,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            warn_at: DEFAULT_WARN_AT.to_vec(),
        }
    }
}

impl QuotaPolicy {
    pub fn new(ceiling: u32, warn_at: Vec<u32>) -> Self {
        Self { ceiling, warn_at }
    }

    /// Decide on an anonymous submission given the completed count.
    pub fn evaluate(&self, count: u32) -> QuotaDecision {
        if count >= self.ceiling {
            return QuotaDecision::Deny;
        }
        if self.warn_at.contains(&count) {
            return QuotaDecision::AllowWithWarning(self.remaining_message(count));
        }
        QuotaDecision::Allow
    }

    /// Free submissions left once the submission at `count` goes through.
    pub fn remaining_after(&self, count: u32) -> u32 {
        self.ceiling.saturating_sub(count + 1)
    }

    fn remaining_message(&self, count: u32) -> String {
        match self.remaining_after(count) {
            0 => "This is your last free prompt. Sign in for unlimited access.".to_string(),
            1 => "You have 1 free prompt left. Sign in for unlimited access.".to_string(),
            n => format!("You have {} free prompts left. Sign in for unlimited access.", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = QuotaPolicy::default();
        assert_eq!(policy.ceiling, 10);
        assert_eq!(policy.warn_at, vec![7, 9]);
    }

    #[test]
    fn test_nth_submission_denied_iff_over_ceiling() {
        let policy = QuotaPolicy::default();
        // The n-th submission sees count = n - 1.
        for n in 1..=25u32 {
            let decision = policy.evaluate(n - 1);
            assert_eq!(
                decision == QuotaDecision::Deny,
                n > policy.ceiling,
                "submission {n}"
            );
        }
    }

    #[test]
    fn test_warnings_only_at_checkpoints() {
        let policy = QuotaPolicy::default();
        let warned: Vec<u32> = (1..=10u32)
            .filter(|n| policy.evaluate(n - 1).warning().is_some())
            .collect();
        assert_eq!(warned, vec![8, 10]);
    }

    #[test]
    fn test_warning_messages_state_remaining_count() {
        let policy = QuotaPolicy::default();
        assert_eq!(
            policy.evaluate(7),
            QuotaDecision::AllowWithWarning(
                "You have 2 free prompts left. Sign in for unlimited access.".to_string()
            )
        );
        assert_eq!(
            policy.evaluate(9).warning(),
            Some("This is your last free prompt. Sign in for unlimited access.")
        );
        assert_eq!(
            QuotaPolicy::new(5, vec![3]).evaluate(3).warning(),
            Some("You have 1 free prompt left. Sign in for unlimited access.")
        );
    }

    #[test]
    fn test_zero_ceiling_denies_everything() {
        let policy = QuotaPolicy::new(0, vec![]);
        assert_eq!(policy.evaluate(0), QuotaDecision::Deny);
    }
}
