//! Configuration for the demo layer.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{FileStorage, KeyValueStorage, NoopStorage, StorageKeys};

/// Storage namespace used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "picks-demo";

pub const ENV_DEMO_MODE: &str = "PICKS_DEMO_MODE";
pub const ENV_DATA_DIR: &str = "PICKS_DEMO_DATA_DIR";
pub const ENV_KEY_PREFIX: &str = "PICKS_DEMO_KEY_PREFIX";

/// Settings for the mock backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Whether the demo backend should stand in for the real one.
    pub enabled: bool,

    /// Directory for durable storage. Without one, data lives only as long
    /// as the process.
    pub data_dir: Option<PathBuf>,

    /// Namespace for storage keys.
    pub key_prefix: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            data_dir: None,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl MockConfig {
    /// Reads settings from `PICKS_DEMO_*` environment variables, keeping
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env::var(ENV_DEMO_MODE)
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.enabled),
            data_dir: env::var_os(ENV_DATA_DIR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            key_prefix: env::var(ENV_KEY_PREFIX)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.key_prefix),
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::new(self.key_prefix.clone())
    }

    /// Opens the configured durable storage. Falls back to [`NoopStorage`]
    /// when no directory is set or it cannot be opened.
    pub fn open_storage(&self) -> Arc<dyn KeyValueStorage> {
        let Some(dir) = &self.data_dir else {
            return Arc::new(NoopStorage);
        };

        match FileStorage::open(dir) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                warn!(
                    "Durable storage at {} unavailable, continuing without it: {e}",
                    dir.display()
                );
                Arc::new(NoopStorage)
            }
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
