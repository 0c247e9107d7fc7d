//! Scenario-keyed dataset store.
//!
//! Datasets are cached per scenario in process memory and mirrored to a
//! [`KeyValueStorage`]. Storage is best-effort: a failing backend is logged
//! and otherwise behaves as if nothing had been persisted.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::builders::DatasetBuilder;
use crate::dataset::DemoData;
use crate::scenarios::{DEFAULT_SCENARIO, ScenarioId};
use crate::storage::{KeyValueStorage, MemoryStorage, StorageKeys};

/// In-process tier: the selected scenario and the datasets loaded so far.
#[derive(Default)]
struct State {
    /// Set by a switch or seeded from storage. Survives a storage backend
    /// that never keeps anything.
    active: Option<ScenarioId>,
    datasets: HashMap<ScenarioId, DemoData>,
}

/// Owns one dataset per scenario and the selected-scenario setting.
pub struct DemoStore {
    storage: Arc<dyn KeyValueStorage>,
    keys: StorageKeys,
    state: Mutex<State>,
}

impl DemoStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            state: Mutex::new(State::default()),
        }
    }

    /// A store over fresh in-memory storage with the default key layout.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), StorageKeys::default())
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// The selected scenario, or the default when nothing valid has been
    /// selected or stored.
    pub async fn active_scenario(&self) -> ScenarioId {
        let mut state = self.state.lock().await;
        self.resolve_active(&mut state).await
    }

    /// Selects a scenario. Its cached dataset is dropped so the next read
    /// reloads it from storage or rebuilds it.
    pub async fn set_active_scenario(&self, scenario: ScenarioId) {
        info!("Switching to {scenario} scenario");
        let mut state = self.state.lock().await;
        state.active = Some(scenario);
        state.datasets.remove(&scenario);

        let key = self.keys.active_scenario();
        self.write(&key, Bytes::from_static(scenario.as_str().as_bytes()))
            .await;
    }

    /// Discards a scenario's dataset from memory and storage, so the next
    /// read rebuilds fixtures. Defaults to the active scenario.
    pub async fn reset_scenario_data(&self, scenario: Option<ScenarioId>) -> ScenarioId {
        let mut state = self.state.lock().await;
        let scenario = match scenario {
            Some(scenario) => scenario,
            None => self.resolve_active(&mut state).await,
        };
        info!("Resetting {scenario} scenario data");

        state.datasets.remove(&scenario);
        let key = self.keys.dataset(scenario);
        if let Err(e) = self.storage.remove(&key).await {
            warn!("Failed to remove {key} from storage: {e}");
        }
        scenario
    }

    /// The active scenario's dataset.
    pub async fn dataset(&self) -> DemoData {
        let mut state = self.state.lock().await;
        let scenario = self.resolve_active(&mut state).await;
        self.load(&mut state.datasets, scenario).await
    }

    /// Replaces the active scenario's dataset with `updater(current)` and
    /// returns the new value. The lock is held throughout, so concurrent
    /// updates and switches apply one after another.
    pub async fn update_dataset<F>(&self, updater: F) -> DemoData
    where
        F: FnOnce(DemoData) -> DemoData,
    {
        let mut state = self.state.lock().await;
        let scenario = self.resolve_active(&mut state).await;
        let current = self.load(&mut state.datasets, scenario).await;

        let updated = updater(current);
        self.persist(scenario, &updated).await;
        state.datasets.insert(scenario, updated.clone());
        updated
    }

    /// Drops every cached dataset. Storage and the selected scenario are
    /// left alone.
    pub async fn clear_cache(&self) {
        self.state.lock().await.datasets.clear();
    }

    pub async fn is_cached(&self, scenario: ScenarioId) -> bool {
        self.state.lock().await.datasets.contains_key(&scenario)
    }

    async fn resolve_active(&self, state: &mut State) -> ScenarioId {
        if let Some(scenario) = state.active {
            return scenario;
        }

        match self.stored_active().await {
            Some(scenario) => {
                state.active = Some(scenario);
                scenario
            }
            None => DEFAULT_SCENARIO,
        }
    }

    async fn stored_active(&self) -> Option<ScenarioId> {
        let raw = self.read(&self.keys.active_scenario()).await?;
        match std::str::from_utf8(&raw).map(str::parse::<ScenarioId>) {
            Ok(Ok(scenario)) => Some(scenario),
            _ => {
                warn!("Ignoring unrecognised active scenario in storage");
                None
            }
        }
    }

    async fn load(
        &self,
        cache: &mut HashMap<ScenarioId, DemoData>,
        scenario: ScenarioId,
    ) -> DemoData {
        if let Some(data) = cache.get(&scenario) {
            debug!("Cache hit for {scenario}");
            return data.clone();
        }

        let data = match self.restore(scenario).await {
            Some(data) => data,
            None => {
                info!("Building {scenario} fixtures");
                let data = DatasetBuilder::new(scenario).build();
                self.persist(scenario, &data).await;
                data
            }
        };

        cache.insert(scenario, data.clone());
        data
    }

    async fn restore(&self, scenario: ScenarioId) -> Option<DemoData> {
        let key = self.keys.dataset(scenario);
        let raw = self.read(&key).await?;

        match serde_json::from_slice::<DemoData>(&raw) {
            Ok(data) if data.scenario == scenario => {
                debug!("Restored {scenario} from storage");
                Some(data)
            }
            Ok(data) => {
                warn!(
                    "Discarding {key}: holds {} data instead of {scenario}",
                    data.scenario
                );
                None
            }
            Err(e) => {
                warn!("Discarding unreadable {key}: {e}");
                None
            }
        }
    }

    async fn persist(&self, scenario: ScenarioId, data: &DemoData) {
        match serde_json::to_vec(data) {
            Ok(json) => self.write(&self.keys.dataset(scenario), Bytes::from(json)).await,
            Err(e) => warn!("Failed to serialize {scenario} dataset: {e}"),
        }
    }

    async fn read(&self, key: &str) -> Option<Bytes> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {key} from storage: {e}");
                None
            }
        }
    }

    async fn write(&self, key: &str, value: Bytes) {
        if let Err(e) = self.storage.set(key, value).await {
            warn!("Failed to write {key} to storage: {e}");
        }
    }
}
