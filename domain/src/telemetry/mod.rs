//! Prompt telemetry record.

use crate::core::artifact::ArtifactType;
use crate::identity::UserId;
use crate::interaction::mode::InteractionMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One prompt submitted by a signed-in user.
///
/// Serialized with the prompt store's field names:
/// `{userId, prompt, type, mode, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub user_id: UserId,
    pub prompt: String,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    pub mode: InteractionMode,
    pub created_at: DateTime<Utc>,
}

impl PromptRecord {
    /// Record stamped with the current UTC time.
    pub fn now(
        user_id: UserId,
        prompt: impl Into<String>,
        artifact_type: ArtifactType,
        mode: InteractionMode,
    ) -> Self {
        Self {
            user_id,
            prompt: prompt.into(),
            artifact_type,
            mode,
            created_at: Utc::now(),
        }
    }
}
