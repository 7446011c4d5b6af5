//! Interaction domain module: the two peer forms of prompting.
//!
//! | Mode | Description | Retained state |
//! |------|-------------|----------------|
//! | [`Command`](mode::InteractionMode::Command) | Single-shot artifact + explanation | Latest result only |
//! | [`Chat`](mode::InteractionMode::Chat) | Multi-turn conversation | Full transcript |
//!
//! [`view_state::ViewState`] is the single tagged state the presentation
//! layer renders from.

pub mod mode;
pub mod view_state;
