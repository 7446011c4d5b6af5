//! Interactive REPL module
//!
//! Provides a readline-based interactive interface over a prompt session.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
