//! Mock backend endpoints.
//!
//! [`MockApi`] exposes the same operations as the picks backend, answering
//! from the [`DemoStore`] instead of the network. Every endpoint returns an
//! [`ApiResponse`](picks::ApiResponse) envelope and never panics or
//! propagates storage failures.
//!
//! Endpoints are grouped by domain in submodules, each adding an
//! `impl MockApi` block.

mod drivers;
mod leaderboard;
mod picks;
mod races;
mod results;
mod scenarios;
mod session;
mod sync;

use std::sync::Arc;

use crate::config::MockConfig;
use crate::store::DemoStore;

/// Demo stand-in for the picks backend.
#[derive(Clone)]
pub struct MockApi {
    config: MockConfig,
    store: Arc<DemoStore>,
}

impl MockApi {
    pub fn new(config: MockConfig, store: Arc<DemoStore>) -> Self {
        Self { config, store }
    }

    /// Builds the store described by `config` and wraps it.
    pub fn from_config(config: MockConfig) -> Self {
        let store = DemoStore::new(config.open_storage(), config.storage_keys());
        Self::new(config, Arc::new(store))
    }

    /// Whether the host should route calls here instead of the real backend.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<DemoStore> {
        &self.store
    }
}
