//! Persistent key-value string storage
//!
//! The [`Store`] trait is the only persistence capability the rest of the crate sees.
//! Values are opaque strings (callers JSON-encode them), mirroring a browser's local
//! storage:
//!
//! - [`FileStore`]: one JSON object file (`storage.json`) in the data directory
//! - [`MemoryStore`]: in-process map for tests and ephemeral sessions
//!
//! Known keys: `history` (owned by [`crate::history`]) and `isDarkTheme` (owned by
//! [`crate::theme`]).

pub mod file;
pub mod memory;

use std::fmt;

use thiserror::Error;

pub use file::{FileStore, STORAGE_FILENAME};
pub use memory::MemoryStore;

/// Failure to reach the backing store
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store could not be read or written (missing permissions, full disk, oversized file)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn unavailable(context: &str, cause: impl fmt::Display) -> Self {
        StorageError::Unavailable(format!("{}: {}", context, cause))
    }
}

/// String-keyed persistent store
pub trait Store {
    /// Read a value, `Ok(None)` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key; removing an absent key succeeds
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
