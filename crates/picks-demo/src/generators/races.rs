//! The race calendar.
//!
//! Sessions are scheduled as offsets from the build time, so which rounds
//! are finished, running or still to come is the same on every build even
//! though the timestamps drift.

use picks::models::{Race, RaceStatus};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::{KIND_RACE, fixture_id};
use crate::generators::SEASON_ID;

/// Round whose qualifying is already under way.
pub const LOCKED_ROUND: u32 = 3;

/// Round exempt from the one-driver-per-season rule.
pub const WILDCARD_ROUND: u32 = 5;

struct RaceSpec {
    round: u32,
    name: &'static str,
    location: &'static str,
    circuit: &'static str,
    country_code: &'static str,
    is_sprint: bool,
    /// Race start relative to the build time, in hours.
    race_offset_hours: i64,
}

static CALENDAR: [RaceSpec; 6] = [
    RaceSpec {
        round: 1,
        name: "Bahrain Grand Prix",
        location: "Sakhir",
        circuit: "Bahrain International Circuit",
        country_code: "BH",
        is_sprint: false,
        race_offset_hours: -21 * 24,
    },
    RaceSpec {
        round: 2,
        name: "Saudi Arabian Grand Prix",
        location: "Jeddah",
        circuit: "Jeddah Corniche Circuit",
        country_code: "SA",
        is_sprint: false,
        race_offset_hours: -14 * 24,
    },
    RaceSpec {
        round: LOCKED_ROUND,
        name: "Miami Grand Prix",
        location: "Miami",
        circuit: "Miami International Autodrome",
        country_code: "US",
        is_sprint: true,
        race_offset_hours: 20,
    },
    RaceSpec {
        round: 4,
        name: "Emilia Romagna Grand Prix",
        location: "Imola",
        circuit: "Autodromo Enzo e Dino Ferrari",
        country_code: "IT",
        is_sprint: false,
        race_offset_hours: 7 * 24,
    },
    RaceSpec {
        round: WILDCARD_ROUND,
        name: "Belgian Grand Prix",
        location: "Spa-Francorchamps",
        circuit: "Circuit de Spa-Francorchamps",
        country_code: "BE",
        is_sprint: true,
        race_offset_hours: 14 * 24,
    },
    RaceSpec {
        round: 6,
        name: "British Grand Prix",
        location: "Silverstone",
        circuit: "Silverstone Circuit",
        country_code: "GB",
        is_sprint: false,
        race_offset_hours: 21 * 24,
    },
];

pub const fn race_id(round: u32) -> Uuid {
    fixture_id(KIND_RACE, round as u64)
}

pub fn races(now: OffsetDateTime, created_at: OffsetDateTime) -> Vec<Race> {
    CALENDAR
        .iter()
        .map(|spec| {
            let race_time = now + Duration::hours(spec.race_offset_hours);
            let qualifying_time = race_time - Duration::days(1);
            let (sprint_qualifying_time, sprint_time) = if spec.is_sprint {
                (
                    Some(race_time - Duration::days(2)),
                    Some(race_time - Duration::hours(28)),
                )
            } else {
                (None, None)
            };

            Race {
                id: race_id(spec.round),
                season_id: SEASON_ID,
                round: spec.round,
                name: spec.name.to_string(),
                location: spec.location.to_string(),
                circuit: spec.circuit.to_string(),
                country_code: spec.country_code.to_string(),
                is_sprint: spec.is_sprint,
                qualifying_time: Some(qualifying_time),
                sprint_qualifying_time,
                race_time: Some(race_time),
                sprint_time,
                is_wildcard: spec.round == WILDCARD_ROUND,
                status: RaceStatus::at(now, Some(qualifying_time), Some(race_time)),
                created_at,
            }
        })
        .collect()
}

/// The first race still open for picks, or the final round once the
/// calendar has run out.
pub fn next_open_race(races: &[Race]) -> Option<&Race> {
    races
        .iter()
        .find(|r| r.status == RaceStatus::Upcoming)
        .or_else(|| races.last())
}
