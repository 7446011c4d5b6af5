//! JSONL prompt store.
//!
//! Each [`PromptRecord`] is serialized as a single JSON line and appended to
//! the file via a buffered writer. The same file backs the history listing.

use async_trait::async_trait;
use genie_application::{PromptHistoryReader, TelemetryError, TelemetrySink};
use genie_domain::{PromptRecord, UserId};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL store of prompt records.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and
/// on `Drop`.
pub struct JsonlPromptStore {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlPromptStore {
    /// Open the store for appending.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TelemetryError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &PromptRecord) -> Result<(), TelemetryError> {
        let line = serde_json::to_string(record)
            .map_err(|e| TelemetryError::Serialization(e.to_string()))?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| TelemetryError::Unavailable(e.to_string()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<PromptRecord>, TelemetryError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<PromptRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    "Skipping malformed line {} in {}: {}",
                    index + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl TelemetrySink for JsonlPromptStore {
    async fn record(&self, record: PromptRecord) -> Result<(), TelemetryError> {
        self.append(&record)
    }
}

#[async_trait]
impl PromptHistoryReader for JsonlPromptStore {
    async fn records_for(&self, user: &UserId) -> Result<Vec<PromptRecord>, TelemetryError> {
        let mut records = self.read_all()?;
        records.retain(|r| &r.user_id == user);
        Ok(records)
    }
}

impl Drop for JsonlPromptStore {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
