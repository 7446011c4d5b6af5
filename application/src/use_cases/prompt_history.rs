//! Prompt history use case.
//!
//! Lists what a signed-in user has submitted, newest first.

use crate::ports::prompt_store::{PromptHistoryReader, TelemetryError};
use genie_domain::{PromptRecord, UserId};
use std::sync::Arc;
use tracing::debug;

pub struct PromptHistoryUseCase {
    reader: Arc<dyn PromptHistoryReader>,
}

impl PromptHistoryUseCase {
    pub fn new(reader: Arc<dyn PromptHistoryReader>) -> Self {
        Self { reader }
    }

    /// Records for `user` ordered by `created_at` descending.
    ///
    /// Anonymous callers get an empty list without touching the store.
    pub async fn execute(&self, user: Option<&UserId>) -> Result<Vec<PromptRecord>, TelemetryError> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };
        let mut records = self.reader.records_for(user).await?;
        records.retain(|r| &r.user_id == user);
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(user = %user, count = records.len(), "Loaded prompt history");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use genie_domain::{ArtifactType, InteractionMode};
    use std::sync::Mutex;

    struct MockReader {
        records: Vec<PromptRecord>,
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl PromptHistoryReader for MockReader {
        async fn records_for(&self, _user: &UserId) -> Result<Vec<PromptRecord>, TelemetryError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.records.clone())
        }
    }

    fn record(user: &str, prompt: &str, hour: u32) -> PromptRecord {
        PromptRecord {
            user_id: UserId::try_new(user).unwrap(),
            prompt: prompt.to_string(),
            artifact_type: ArtifactType::Kubernetes,
            mode: InteractionMode::Command,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_newest_first_for_user() {
        let reader = Arc::new(MockReader {
            records: vec![
                record("u1", "first", 8),
                record("u2", "other user", 9),
                record("u1", "third", 11),
                record("u1", "second", 10),
            ],
            calls: Mutex::new(0),
        });
        let use_case = PromptHistoryUseCase::new(reader);
        let user = UserId::try_new("u1").unwrap();

        let prompts: Vec<String> = use_case
            .execute(Some(&user))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.prompt)
            .collect();
        assert_eq!(prompts, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_anonymous_gets_empty_list() {
        let reader = Arc::new(MockReader {
            records: vec![record("u1", "first", 8)],
            calls: Mutex::new(0),
        });
        let use_case = PromptHistoryUseCase::new(reader.clone());

        assert!(use_case.execute(None).await.unwrap().is_empty());
        assert_eq!(*reader.calls.lock().unwrap(), 0);
    }
}
