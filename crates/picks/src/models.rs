use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// How long a race is considered running after lights out.
pub const RACE_WINDOW: Duration = Duration::hours(2);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: Uuid,
    pub year: i32,
    pub name: String,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub season_id: Uuid,
    /// Three-letter timing-screen code, e.g. `VER`.
    pub code: String,
    pub name: String,
    pub number: u32,
    pub team_name: String,
    /// Hex colour including the leading `#`.
    pub team_color: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceStatus {
    Upcoming,
    InProgress,
    Completed,
}

impl RaceStatus {
    /// Derives the status of a race weekend from its schedule.
    ///
    /// A weekend is in progress from the start of qualifying (or lights out
    /// when there is no qualifying session) until [`RACE_WINDOW`] after the
    /// race start.
    pub fn at(
        now: OffsetDateTime,
        qualifying: Option<OffsetDateTime>,
        race_start: Option<OffsetDateTime>,
    ) -> Self {
        match race_start {
            Some(start) if start + RACE_WINDOW < now => RaceStatus::Completed,
            _ => match qualifying.or(race_start) {
                Some(opens) if opens <= now => RaceStatus::InProgress,
                _ => RaceStatus::Upcoming,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RaceStatus::Upcoming => "upcoming",
            RaceStatus::InProgress => "in_progress",
            RaceStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: Uuid,
    pub season_id: Uuid,
    pub round: u32,
    pub name: String,
    pub location: String,
    pub circuit: String,
    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,
    pub is_sprint: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub qualifying_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub sprint_qualifying_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub race_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub sprint_time: Option<OffsetDateTime>,
    /// Wild-card rounds are exempt from the one-driver-per-season rule.
    pub is_wildcard: bool,
    pub status: RaceStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Race {
    /// Picks close when qualifying starts.
    pub fn is_pick_locked(&self, now: OffsetDateTime) -> bool {
        self.qualifying_time.is_some_and(|q| q <= now)
    }
}

/// A user's driver choice for one race.
///
/// Picks returned to the client are enriched with the embedded driver and
/// race, and with points once the race has been scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub id: Uuid,
    pub user_id: Uuid,
    pub race_id: Uuid,
    pub driver_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<Driver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Pick {
    pub fn new(user_id: Uuid, race: &Race, driver: &Driver) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            race_id: race.id,
            driver_id: driver.id,
            created_at: OffsetDateTime::now_utc(),
            driver: Some(driver.clone()),
            race: Some(race.clone()),
            points: None,
            user_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: Uuid,
    pub user_name: String,
    pub total_points: i32,
    pub races_completed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub id: Uuid,
    pub race_id: Uuid,
    pub driver_id: Uuid,
    pub race_position: Option<u32>,
    pub sprint_position: Option<u32>,
    pub race_points: i32,
    pub sprint_points: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
