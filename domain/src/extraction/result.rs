//! Command-mode result value objects

use crate::core::artifact::ArtifactType;
use crate::core::error::DomainError;
use crate::extraction::fence::{explanation_or_default, extract_code};
use serde::{Deserialize, Serialize};

/// Advisory rendered instead of blank output when no code came back.
pub const EMPTY_CODE_ADVISORY: &str = "No command generated.";

/// Output of a single Command-mode submission (Value Object)
///
/// Each submission replaces the previous result; Command mode keeps no
/// history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub code: String,
    pub explanation: String,
    pub succeeded: bool,
}

impl CommandResult {
    /// Build a result from the backend's raw `code` text and optional
    /// `explanation` field.
    pub fn from_response(raw_code: &str, explanation: Option<&str>) -> Self {
        Self {
            code: extract_code(raw_code),
            explanation: explanation_or_default(explanation),
            succeeded: true,
        }
    }

    /// A well-formed response with nothing usable in it.
    pub fn is_empty_result(&self) -> bool {
        self.code.is_empty()
    }

    /// The code to show, falling back to [`EMPTY_CODE_ADVISORY`].
    pub fn display_code(&self) -> &str {
        if self.code.is_empty() {
            EMPTY_CODE_ADVISORY
        } else {
            &self.code
        }
    }

    /// The text behind a given output tab.
    pub fn tab_content(&self, tab: OutputTab) -> &str {
        match tab {
            OutputTab::Command => self.display_code(),
            OutputTab::Explanation => &self.explanation,
        }
    }
}

/// Which half of a command result is shown, copied or downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTab {
    #[default]
    Command,
    Explanation,
}

impl OutputTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputTab::Command => "command",
            OutputTab::Explanation => "explanation",
        }
    }
}

impl std::str::FromStr for OutputTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "command" | "code" => Ok(OutputTab::Command),
            "explanation" | "explain" => Ok(OutputTab::Explanation),
            _ => Err(DomainError::InvalidOutputTab(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A plain-text file ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub content: String,
}

impl DownloadArtifact {
    pub fn new(artifact: &ArtifactType, content: impl Into<String>) -> Self {
        Self {
            file_name: artifact.output_file_name(),
            content: content.into(),
        }
    }
}
