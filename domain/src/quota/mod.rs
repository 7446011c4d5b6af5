//! Anonymous usage quota.
//!
//! - [`policy::QuotaPolicy`]: ceiling and warning checkpoints
//! - [`policy::QuotaDecision`]: allow, warn, or deny a submission

pub mod policy;
