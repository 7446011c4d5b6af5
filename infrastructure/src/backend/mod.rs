//! HTTP adapter for the generative backend.
//!
//! - [`protocol`]: JSON bodies of `/generate`, `/chat` and `/check-error`
//! - [`dispatcher::HttpRequestDispatcher`]: the [`RequestDispatcher`] over reqwest
//!
//! [`RequestDispatcher`]: genie_application::RequestDispatcher

pub mod dispatcher;
pub mod protocol;

pub use dispatcher::HttpRequestDispatcher;
