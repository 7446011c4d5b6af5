//! Session observer port
//!
//! Defines how the presentation layer hears about session changes.
//! Every method has a no-op default so observers implement only what they
//! render.

use genie_domain::ViewState;

/// Callbacks fired by a [`PromptSession`](crate::PromptSession).
pub trait SessionObserver: Send + Sync {
    /// Called on every view state transition.
    fn on_state_change(&self, _state: ViewState) {}

    /// Called once per entry into `Succeeded` or `Failed`; the presentation
    /// layer moves the result region into view.
    fn on_result_ready(&self, _state: ViewState) {}

    /// Called when an anonymous submission is allowed but near the ceiling.
    fn on_quota_warning(&self, _message: &str) {}

    /// Called when an anonymous submission is denied. The notice blocks
    /// further submissions until the user signs in.
    fn on_quota_denied(&self, _message: &str) {}

    /// Called after the redirect delay following a denial.
    fn on_auth_redirect(&self) {}
}

/// No-op observer for when nothing renders session changes.
pub struct NoSessionObserver;

impl SessionObserver for NoSessionObserver {}
