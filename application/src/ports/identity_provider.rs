//! Identity provider port
//!
//! The "current user" is owned by an external identity service; the session
//! only asks who, if anyone, is signed in.

use genie_domain::UserId;

/// Source of the currently signed-in user.
pub trait IdentityProvider: Send + Sync {
    /// `None` while the user is anonymous.
    fn current_user(&self) -> Option<UserId>;
}

/// Always anonymous.
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn current_user(&self) -> Option<UserId> {
        None
    }
}

/// Always the same signed-in user.
pub struct FixedIdentity(pub UserId);

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<UserId> {
        Some(self.0.clone())
    }
}
