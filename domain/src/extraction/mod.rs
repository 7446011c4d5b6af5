//! Response extraction: turning backend text into displayable output.
//!
//! - [`fence::extract_code`]: first fenced block, or the whole text
//! - [`result::CommandResult`]: the code/explanation pair of a command run
//! - [`result::DownloadArtifact`]: a named plain-text file to save

pub mod fence;
pub mod result;

pub use fence::{MISSING_EXPLANATION, explanation_or_default, extract_code};
pub use result::{CommandResult, DownloadArtifact, EMPTY_CODE_ADVISORY, OutputTab};
