//! Demo data for Paddock Picks.
//!
//! This crate lets the picks client run without a backend: it fabricates a
//! season of drivers, races, picks, standings and results for a handful of
//! named scenarios, keeps one dataset per scenario in a two-tier store
//! (process memory plus durable key-value storage), and answers the
//! backend's endpoints from it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use picks_demo::prelude::*;
//!
//! let api = MockApi::from_config(MockConfig::from_env());
//! api.switch_scenario(ScenarioId::Fresh).await;
//!
//! let picks = api.picks().await;
//! assert_eq!(picks.data().map(Vec::len), Some(0));
//! ```

pub mod api;
pub mod builders;
pub mod config;
pub mod dataset;
pub mod generators;
pub mod scenarios;
pub mod storage;
pub mod store;

// Re-export core types from the picks crate
pub use picks::models::{Driver, LeaderboardEntry, Pick, Race, RaceResult, RaceStatus, Season, User};
pub use picks::{ApiResponse, AppError};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::api::MockApi;
    pub use crate::builders::{DatasetBuilder, build_dataset};
    pub use crate::config::MockConfig;
    pub use crate::dataset::DemoData;
    pub use crate::scenarios::{DEFAULT_SCENARIO, SCENARIOS, ScenarioDescriptor, ScenarioId};
    pub use crate::storage::{
        FileStorage, KeyValueStorage, MemoryStorage, NoopStorage, StorageError, StorageKeys,
    };
    pub use crate::store::DemoStore;
    pub use crate::{ApiResponse, AppError};
}
