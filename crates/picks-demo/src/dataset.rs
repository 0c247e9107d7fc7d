//! The aggregate handed out by the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use picks::models::{Driver, LeaderboardEntry, Pick, Race, Season, User};
use picks::types::RaceResultsPayload;

use crate::scenarios::ScenarioId;

/// Everything the demo backend knows about one scenario.
///
/// A value is never edited in place once stored; updates go through
/// [`DemoStore::update_dataset`](crate::store::DemoStore::update_dataset)
/// which replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoData {
    pub scenario: ScenarioId,
    pub season: Season,
    pub user: User,
    pub token: String,
    pub drivers: Vec<Driver>,
    pub races: Vec<Race>,
    /// The signed-in user's picks, enriched with driver and race.
    pub picks: Vec<Pick>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub current_race_id: Uuid,
    /// Precomputed results keyed by race id.
    pub race_results: BTreeMap<Uuid, RaceResultsPayload>,
}

impl DemoData {
    pub fn race(&self, race_id: Uuid) -> Option<&Race> {
        self.races.iter().find(|r| r.id == race_id)
    }

    pub fn driver(&self, driver_id: Uuid) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == driver_id)
    }

    /// The race picks are currently being made for, falling back to the
    /// first race on the calendar.
    pub fn current_race(&self) -> Option<&Race> {
        self.race(self.current_race_id).or_else(|| self.races.first())
    }

    /// The signed-in user's pick for a race, if any.
    pub fn user_pick_for(&self, race_id: Uuid) -> Option<&Pick> {
        self.picks
            .iter()
            .find(|p| p.race_id == race_id && p.user_id == self.user.id)
    }
}
