//! Presentation layer for infragenie
//!
//! This crate contains CLI definitions, console formatting, the session
//! progress observer, and the interactive REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use output::download::save_download;
pub use progress::reporter::ProgressReporter;
