//! Chat domain.
//!
//! - [`entities::ChatTurn`]: a single role-tagged message
//! - [`entities::ChatHistory`]: the ordered, append-only transcript

pub mod entities;
