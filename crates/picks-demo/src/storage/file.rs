use std::path::Path as FsPath;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{ObjectStore, PutOptions, local::LocalFileSystem, path::Path};
use tracing::debug;

use super::{KeyValueStorage, StorageError};

/// Durable storage on local disk. Each key is a file below the root
/// directory, with `/` in keys becoming subdirectories.
#[derive(Clone, Debug)]
pub struct FileStorage {
    store: Arc<dyn ObjectStore>,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory if needed.
    pub fn open(root: impl AsRef<FsPath>) -> Result<Self, StorageError> {
        let root = root.as_ref();
        std::fs::create_dir_all(root)?;
        let store = LocalFileSystem::new_with_prefix(root)?;
        debug!("Opened file storage at {}", root.display());

        Ok(Self {
            store: Arc::new(store),
        })
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        match self.store.get(&Path::from(key)).await {
            Ok(result) => Ok(Some(result.bytes().await?)),
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<(), StorageError> {
        self.store
            .put_opts(&Path::from(key), value.into(), PutOptions::default())
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self.store.delete(&Path::from(key)).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
