//! Fluent builder for constructing scenario datasets.

use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::dataset::DemoData;
use crate::generators::{
    self, races::LOCKED_ROUND, next_open_race, race_id, race_results, seeded_picks,
};
use crate::scenarios::ScenarioId;

/// How long before the build time the season's records were created.
const SEASON_AGE: Duration = Duration::days(90);

/// Builds the dataset for a scenario against the wall clock.
pub fn build_dataset(scenario: ScenarioId) -> DemoData {
    DatasetBuilder::new(scenario).build()
}

/// Builder for a scenario's dataset.
///
/// # Example
///
/// ```rust
/// use picks_demo::builders::DatasetBuilder;
/// use picks_demo::scenarios::ScenarioId;
///
/// let data = DatasetBuilder::new(ScenarioId::Locked).build();
/// assert_eq!(data.races.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    scenario: ScenarioId,
    now: Option<OffsetDateTime>,
}

impl DatasetBuilder {
    pub fn new(scenario: ScenarioId) -> Self {
        Self {
            scenario,
            now: None,
        }
    }

    /// Pins the clock the calendar is scheduled against.
    pub fn with_now(mut self, now: OffsetDateTime) -> Self {
        self.now = Some(now);
        self
    }

    pub fn build(&self) -> DemoData {
        let now = self.now.unwrap_or_else(OffsetDateTime::now_utc);
        let created_at = now - SEASON_AGE;
        let scenario = self.scenario;

        let season = generators::season(created_at);
        let user = generators::current_user(scenario, created_at);
        let drivers = generators::drivers(created_at);
        let races = generators::races(now, created_at);
        let race_results = race_results(&drivers, &races, created_at);
        let picks = seeded_picks(scenario, user.id, &drivers, &races, &race_results, created_at);
        let leaderboard = generators::leaderboard(scenario, &user);

        let current_race_id = match scenario {
            ScenarioId::Locked => race_id(LOCKED_ROUND),
            _ => next_open_race(&races).map_or(race_id(1), |r| r.id),
        };

        debug!(
            "Built {scenario} dataset: {} races, {} picks, {} leaderboard entries",
            races.len(),
            picks.len(),
            leaderboard.len()
        );

        DemoData {
            scenario,
            season,
            user,
            token: generators::session_token(scenario),
            drivers,
            races,
            picks,
            leaderboard,
            current_race_id,
            race_results,
        }
    }
}
