//! The championship season.

use picks::models::Season;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{KIND_SEASON, fixture_id};

pub const SEASON_YEAR: i32 = 2025;
pub const SEASON_ID: Uuid = fixture_id(KIND_SEASON, SEASON_YEAR as u64);

pub fn season(created_at: OffsetDateTime) -> Season {
    Season {
        id: SEASON_ID,
        year: SEASON_YEAR,
        name: format!("{SEASON_YEAR} Paddock Picks Championship"),
        is_active: true,
        created_at,
    }
}
