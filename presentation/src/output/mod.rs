//! Output rendering
//!
//! - [`console::ConsoleFormatter`]: colored terminal rendering
//! - [`download::save_download`]: writing a [`DownloadArtifact`](genie_domain::DownloadArtifact)

pub mod console;
pub mod download;
