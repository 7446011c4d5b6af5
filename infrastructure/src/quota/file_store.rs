//! JSON file quota store.
//!
//! The file maps an anonymous scope to its completed-submission count:
//!
//! ```json
//! { "anonymous": 4 }
//! ```

use genie_application::{QuotaStore, QuotaStoreError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Scope used when none is configured.
pub const DEFAULT_SCOPE: &str = "anonymous";

type Counters = BTreeMap<String, u32>;

/// [`QuotaStore`] backed by a small JSON file.
///
/// Other scopes in the same file are preserved on write.
pub struct FileQuotaStore {
    path: PathBuf,
    scope: String,
    lock: Mutex<()>,
}

impl FileQuotaStore {
    pub fn new(path: impl Into<PathBuf>, scope: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scope: scope.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Counters, QuotaStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Counters::new()),
            Err(e) => return Err(QuotaStoreError::Io(e.to_string())),
        };
        if content.trim().is_empty() {
            return Ok(Counters::new());
        }
        serde_json::from_str(&content).map_err(|e| QuotaStoreError::Corrupt(e.to_string()))
    }

    fn write(&self, counters: &Counters) -> Result<(), QuotaStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| QuotaStoreError::Io(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(counters)
            .map_err(|e| QuotaStoreError::Io(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| QuotaStoreError::Io(e.to_string()))
    }

    /// Read for a write; a corrupt file is replaced rather than blocking it.
    fn read_for_update(&self) -> Result<Counters, QuotaStoreError> {
        match self.read() {
            Err(QuotaStoreError::Corrupt(e)) => {
                warn!("Replacing corrupt quota file {}: {}", self.path.display(), e);
                Ok(Counters::new())
            }
            other => other,
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, QuotaStoreError> {
        self.lock
            .lock()
            .map_err(|e| QuotaStoreError::Io(e.to_string()))
    }
}

impl QuotaStore for FileQuotaStore {
    fn get(&self) -> Result<u32, QuotaStoreError> {
        let _guard = self.guard()?;
        Ok(self.read()?.get(&self.scope).copied().unwrap_or(0))
    }

    fn set(&self, count: u32) -> Result<(), QuotaStoreError> {
        let _guard = self.guard()?;
        let mut counters = self.read_for_update()?;
        counters.insert(self.scope.clone(), count);
        self.write(&counters)
    }

    fn clear(&self) -> Result<(), QuotaStoreError> {
        let _guard = self.guard()?;
        let mut counters = self.read_for_update()?;
        if counters.remove(&self.scope).is_some() {
            self.write(&counters)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileQuotaStore::new(dir.path().join("quota.json"), DEFAULT_SCOPE);
        assert_eq!(store.get().unwrap(), 0);
    }

    #[test]
    fn test_set_get_clear_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quota.json");
        let store = FileQuotaStore::new(&path, DEFAULT_SCOPE);

        store.set(3).unwrap();
        // A fresh store over the same file sees the count.
        assert_eq!(FileQuotaStore::new(&path, DEFAULT_SCOPE).get().unwrap(), 3);

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), 0);
    }

    #[test]
    fn test_scopes_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quota.json");
        let a = FileQuotaStore::new(&path, "a");
        let b = FileQuotaStore::new(&path, "b");

        a.set(2).unwrap();
        b.set(7).unwrap();
        a.clear().unwrap();
        assert_eq!(a.get().unwrap(), 0);
        assert_eq!(b.get().unwrap(), 7);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quota.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileQuotaStore::new(&path, DEFAULT_SCOPE);

        assert!(matches!(store.get(), Err(QuotaStoreError::Corrupt(_))));
        // Writing replaces the corrupt content.
        store.set(1).unwrap();
        assert_eq!(store.get().unwrap(), 1);
    }
}
