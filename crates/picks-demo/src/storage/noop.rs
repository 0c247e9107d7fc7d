use async_trait::async_trait;
use bytes::Bytes;
use tracing::trace;

use super::{KeyValueStorage, StorageError};

/// Storage for hosts with nowhere durable to write. Writes are accepted and
/// dropped, reads find nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

#[async_trait]
impl KeyValueStorage for NoopStorage {
    async fn get(&self, _key: &str) -> Result<Option<Bytes>, StorageError> {
        Ok(None)
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<(), StorageError> {
        trace!("Dropping {} bytes for {key}", value.len());
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
