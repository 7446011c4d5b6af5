//! Quota store port
//!
//! Client-local persistence of the anonymous usage counter.

use std::sync::Mutex;
use thiserror::Error;

/// Errors from reading or writing the local counter.
#[derive(Error, Debug)]
pub enum QuotaStoreError {
    #[error("Quota storage I/O error: {0}")]
    Io(String),

    #[error("Quota storage is corrupt: {0}")]
    Corrupt(String),
}

/// Storage for the anonymous usage counter.
///
/// Scoped to one anonymous identity; the implementation decides the key.
pub trait QuotaStore: Send + Sync {
    /// Current count; zero when nothing has been stored yet.
    fn get(&self) -> Result<u32, QuotaStoreError>;

    fn set(&self, count: u32) -> Result<(), QuotaStoreError>;

    /// Drop the stored counter entirely.
    fn clear(&self) -> Result<(), QuotaStoreError>;
}

/// In-memory counter for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryQuotaStore {
    count: Mutex<u32>,
}

impl InMemoryQuotaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing count.
    pub fn with_count(count: u32) -> Self {
        Self {
            count: Mutex::new(count),
        }
    }
}

impl QuotaStore for InMemoryQuotaStore {
    fn get(&self) -> Result<u32, QuotaStoreError> {
        self.count
            .lock()
            .map(|c| *c)
            .map_err(|e| QuotaStoreError::Io(e.to_string()))
    }

    fn set(&self, count: u32) -> Result<(), QuotaStoreError> {
        let mut guard = self
            .count
            .lock()
            .map_err(|e| QuotaStoreError::Io(e.to_string()))?;
        *guard = count;
        Ok(())
    }

    fn clear(&self) -> Result<(), QuotaStoreError> {
        self.set(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryQuotaStore::new();
        assert_eq!(store.get().unwrap(), 0);
        store.set(4).unwrap();
        assert_eq!(store.get().unwrap(), 4);
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), 0);
    }

    #[test]
    fn test_with_count() {
        assert_eq!(InMemoryQuotaStore::with_count(9).get().unwrap(), 9);
    }
}
