//! Use cases (application services)

pub mod check_errors;
pub mod prompt_history;
pub mod prompt_session;
