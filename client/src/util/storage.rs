//! Durable key-value storage for session data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists its token through the `TokenStorage` seam so the
//! browser `localStorage` binding can be swapped for an in-memory map in tests
//! and on non-browser targets.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `StorageError` instead of panicking. Callers decide
//! whether a failure is fatal; session initialization treats it as "no session".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Simple string key-value storage.
pub trait TokenStorage {
    /// Read the value stored under `key`, `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the value was not persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`.
///
/// The handle is looked up on every call, so the type itself carries no
/// browser objects and can live inside `Send + Sync` signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory storage. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a storage pre-populated with `key = value`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.write() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        storage
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|e| StorageError::Write(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
