//! Client-local quota persistence.

mod file_store;

pub use file_store::{DEFAULT_SCOPE, FileQuotaStore};
