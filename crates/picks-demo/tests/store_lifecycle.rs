//! Integration tests for the scenario store.
//!
//! These cover the two cache tiers: in-process reuse, restoring from
//! storage after a "reload", validation of stored payloads, and graceful
//! degradation when the storage backend fails.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use picks_demo::Pick;
use picks_demo::prelude::*;

/// Storage whose reads and writes can be made to fail on demand.
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    fail_reads: bool,
    fail_writes: bool,
    writes: AtomicUsize,
}

impl FlakyStorage {
    fn failing() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl KeyValueStorage for FlakyStorage {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("read refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("remove refused".to_string()));
        }
        self.inner.remove(key).await
    }
}

fn store_over(storage: &MemoryStorage) -> DemoStore {
    DemoStore::new(Arc::new(storage.clone()), StorageKeys::default())
}

fn with_extra_pick(data: DemoData) -> DemoData {
    let race = data.races[5].clone();
    let driver = data.drivers[9].clone();
    let mut picks = data.picks.clone();
    picks.push(Pick::new(data.user.id, &race, &driver));
    DemoData { picks, ..data }
}

#[tokio::test]
async fn test_repeated_reads_return_identical_dataset() {
    for scenario in ScenarioId::ALL {
        let store = DemoStore::in_memory();
        store.set_active_scenario(scenario).await;

        let first = store.dataset().await;
        let second = store.dataset().await;
        assert_eq!(first, second);
        assert_eq!(first.scenario, scenario);
    }
}

#[tokio::test]
async fn test_switching_scenario_changes_dataset() {
    let store = DemoStore::in_memory();
    assert_eq!(store.dataset().await.scenario, ScenarioId::Showcase);

    store.set_active_scenario(ScenarioId::Fresh).await;
    let fresh = store.dataset().await;
    assert_eq!(fresh.scenario, ScenarioId::Fresh);
    assert!(fresh.picks.is_empty());

    store.set_active_scenario(ScenarioId::Admin).await;
    assert!(store.dataset().await.user.is_admin);
}

#[tokio::test]
async fn test_update_round_trips() {
    let store = DemoStore::in_memory();
    let updated = store.update_dataset(with_extra_pick).await;

    assert_eq!(updated.picks.len(), 5);
    assert_eq!(store.dataset().await, updated);
}

#[tokio::test]
async fn test_scenarios_do_not_share_updates() {
    let store = DemoStore::in_memory();
    store.update_dataset(with_extra_pick).await;

    store.set_active_scenario(ScenarioId::Admin).await;
    assert_eq!(store.dataset().await.picks.len(), 4);

    store.set_active_scenario(ScenarioId::Showcase).await;
    assert_eq!(store.dataset().await.picks.len(), 5);
}

#[tokio::test]
async fn test_reset_rebuilds_fixtures() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    let fresh_build = store.dataset().await;
    store.update_dataset(with_extra_pick).await;

    store.reset_scenario_data(Some(ScenarioId::Showcase)).await;
    let rebuilt = store.dataset().await;

    assert_eq!(rebuilt.picks.len(), fresh_build.picks.len());
    let pick_ids = |d: &DemoData| d.picks.iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(pick_ids(&rebuilt), pick_ids(&fresh_build));
    assert_eq!(rebuilt.leaderboard, fresh_build.leaderboard);
    assert_eq!(rebuilt.current_race_id, fresh_build.current_race_id);

    // The mutated copy is gone from storage too
    let reloaded = store_over(&storage).dataset().await;
    assert_eq!(reloaded.picks.len(), fresh_build.picks.len());
}

#[tokio::test]
async fn test_dataset_survives_reload() {
    let storage = MemoryStorage::new();

    let first = store_over(&storage);
    first.set_active_scenario(ScenarioId::Locked).await;
    let updated = first.update_dataset(with_extra_pick).await;

    // A new store over the same storage behaves like a page reload
    let second = store_over(&storage);
    assert_eq!(second.active_scenario().await, ScenarioId::Locked);
    assert!(!second.is_cached(ScenarioId::Locked).await);
    assert_eq!(second.dataset().await, updated);
}

#[tokio::test]
async fn test_switch_reloads_from_storage() {
    let store = DemoStore::in_memory();
    let updated = store.update_dataset(with_extra_pick).await;

    store.set_active_scenario(ScenarioId::Showcase).await;
    assert!(!store.is_cached(ScenarioId::Showcase).await);
    assert_eq!(store.dataset().await, updated);
}

#[tokio::test]
async fn test_unknown_active_scenario_falls_back_to_default() {
    let storage = MemoryStorage::new();
    let keys = StorageKeys::default();
    storage
        .set(&keys.active_scenario(), Bytes::from_static(b"staging"))
        .await
        .unwrap();

    let store = store_over(&storage);
    assert_eq!(store.active_scenario().await, DEFAULT_SCENARIO);

    storage
        .set(&keys.active_scenario(), Bytes::from_static(&[0xff, 0xfe]))
        .await
        .unwrap();
    assert_eq!(store.active_scenario().await, DEFAULT_SCENARIO);
}

#[tokio::test]
async fn test_payload_for_other_scenario_is_discarded() {
    let storage = MemoryStorage::new();
    let keys = StorageKeys::default();

    // Admin data filed under the fresh key
    let admin = build_dataset(ScenarioId::Admin);
    storage
        .set(
            &keys.dataset(ScenarioId::Fresh),
            Bytes::from(serde_json::to_vec(&admin).unwrap()),
        )
        .await
        .unwrap();

    let store = store_over(&storage);
    store.set_active_scenario(ScenarioId::Fresh).await;
    let data = store.dataset().await;

    assert_eq!(data.scenario, ScenarioId::Fresh);
    assert!(!data.user.is_admin);
    assert!(data.picks.is_empty());
}

#[tokio::test]
async fn test_corrupt_payload_is_discarded() {
    let storage = MemoryStorage::new();
    let keys = StorageKeys::default();
    storage
        .set(
            &keys.dataset(ScenarioId::Showcase),
            Bytes::from_static(b"{\"scenario\":\"showcase\",\"season\":"),
        )
        .await
        .unwrap();

    let data = store_over(&storage).dataset().await;
    assert_eq!(data.scenario, ScenarioId::Showcase);
    assert_eq!(data.races.len(), 6);
}

#[tokio::test]
async fn test_failing_storage_degrades_to_cache_only() {
    let storage = Arc::new(FlakyStorage::failing());
    let store = DemoStore::new(storage.clone(), StorageKeys::default());

    // Reads fail, so the default scenario is used
    assert_eq!(store.active_scenario().await, DEFAULT_SCENARIO);

    let updated = store.update_dataset(with_extra_pick).await;
    assert_eq!(store.dataset().await, updated);
    assert!(storage.writes.load(Ordering::SeqCst) > 0);

    // Reset still clears the in-process copy
    store.reset_scenario_data(None).await;
    assert_eq!(store.dataset().await.picks.len(), 4);
}

#[tokio::test]
async fn test_failing_writes_keep_cache_updates() {
    let storage = Arc::new(FlakyStorage {
        fail_writes: true,
        ..FlakyStorage::default()
    });
    let store = DemoStore::new(storage, StorageKeys::default());

    let updated = store.update_dataset(with_extra_pick).await;
    assert_eq!(updated.picks.len(), 5);
    assert_eq!(store.dataset().await.picks.len(), 5);
}

#[tokio::test]
async fn test_switching_without_durable_storage() {
    let store = DemoStore::new(Arc::new(NoopStorage), StorageKeys::default());

    store.set_active_scenario(ScenarioId::Fresh).await;
    assert_eq!(store.active_scenario().await, ScenarioId::Fresh);
    let fresh = store.dataset().await;
    assert_eq!(fresh.scenario, ScenarioId::Fresh);
    assert!(fresh.picks.is_empty());

    store.set_active_scenario(ScenarioId::Admin).await;
    assert!(store.dataset().await.user.is_admin);
}

#[tokio::test]
async fn test_switching_when_writes_fail() {
    let storage = Arc::new(FlakyStorage {
        fail_writes: true,
        ..FlakyStorage::default()
    });
    let store = DemoStore::new(storage, StorageKeys::default());

    store.set_active_scenario(ScenarioId::Locked).await;
    assert_eq!(store.active_scenario().await, ScenarioId::Locked);

    // Updates land on the scenario just switched to
    let updated = store.update_dataset(with_extra_pick).await;
    assert_eq!(updated.scenario, ScenarioId::Locked);
    assert_eq!(updated.picks.len(), 6);
    assert_eq!(store.dataset().await, updated);
}

#[tokio::test]
async fn test_update_after_switch_targets_new_scenario() {
    let store = Arc::new(DemoStore::in_memory());

    let switching = {
        let store = store.clone();
        tokio::spawn(async move { store.set_active_scenario(ScenarioId::Admin).await })
    };
    switching.await.unwrap();
    let updated = store.update_dataset(with_extra_pick).await;

    assert_eq!(updated.scenario, ScenarioId::Admin);
    store.set_active_scenario(ScenarioId::Showcase).await;
    assert_eq!(store.dataset().await.picks.len(), 4);
}

#[tokio::test]
async fn test_file_storage_survives_restart() {
    let dir = std::env::temp_dir().join(format!("picks-demo-store-{}", uuid::Uuid::new_v4()));
    let config = MockConfig::default().with_data_dir(&dir);

    let first = DemoStore::new(config.open_storage(), config.storage_keys());
    first.set_active_scenario(ScenarioId::Admin).await;
    let updated = first.update_dataset(with_extra_pick).await;

    let second = DemoStore::new(config.open_storage(), config.storage_keys());
    assert_eq!(second.active_scenario().await, ScenarioId::Admin);
    assert_eq!(second.dataset().await, updated);

    let _ = std::fs::remove_dir_all(&dir);
}
