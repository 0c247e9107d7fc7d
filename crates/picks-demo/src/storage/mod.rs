//! Durable key-value storage behind the scenario store.
//!
//! The store only needs `get`/`set`/`remove` on opaque bytes, so any
//! backend can sit behind [`KeyValueStorage`]:
//! - [`MemoryStorage`]: process-wide map, survives store re-creation
//! - [`NoopStorage`]: for hosts without durable storage
//! - [`FileStorage`]: files on local disk via `object_store`

mod file;
mod memory;
mod noop;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::scenarios::ScenarioId;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use noop::NoopStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(#[from] object_store::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Byte-oriented key-value storage.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError>;

    async fn set(&self, key: &str, value: Bytes) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Key layout within a storage namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key holding the id of the selected scenario.
    pub fn active_scenario(&self) -> String {
        format!("{}/active-scenario", self.prefix)
    }

    /// Key holding a scenario's serialized dataset.
    pub fn dataset(&self, scenario: ScenarioId) -> String {
        format!("{}/data/{scenario}", self.prefix)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_KEY_PREFIX)
    }
}
