//! View state of a prompt session.

use serde::{Deserialize, Serialize};

/// The single state the presentation layer renders from.
///
/// Replaces independent `loading` / `error` flags; impossible combinations
/// such as "loading and failed" cannot be represented.
///
/// ```text
/// Idle ──submit──▶ Submitting ──▶ Succeeded ─┐
///   ▲                   │                    │
///   │                   └───────▶ Failed ────┤ (retry → Submitting)
///   └──── mode / artifact switch ◀───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl ViewState {
    /// Whether a new submission may start from this state.
    ///
    /// Submitting is excluded: at most one dispatch is in flight.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, ViewState::Submitting)
    }

    /// Terminal states are the ones that show a result region.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ViewState::Succeeded | ViewState::Failed)
    }

    /// Only a failed exchange offers the retry action.
    pub fn can_retry(&self) -> bool {
        matches!(self, ViewState::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Submitting => "submitting",
            ViewState::Succeeded => "succeeded",
            ViewState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
