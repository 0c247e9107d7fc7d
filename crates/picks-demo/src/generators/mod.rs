//! Fixture generators for the demo dataset.
//!
//! Each generator owns one fixed table and turns it into model values:
//! - [`season`]: the championship season
//! - [`drivers`]: the ten-driver grid
//! - [`races`]: the six-round calendar, scheduled relative to "now"
//! - [`users`]: the signed-in player and their rivals
//! - [`picks`]: the signed-in player's seeded picks
//! - [`leaderboard`]: standings
//! - [`results`]: classified results for completed rounds
//!
//! Identities are fixed, so the same driver or race has the same id in
//! every scenario.

pub mod drivers;
pub mod leaderboard;
pub mod picks;
pub mod races;
pub mod results;
pub mod season;
pub mod users;

use uuid::Uuid;

pub use drivers::{driver_id, drivers};
pub use leaderboard::leaderboard;
pub use self::picks::seeded_picks;
pub use races::{next_open_race, race_id, races};
pub use results::race_results;
pub use season::{SEASON_ID, season};
pub use users::{DEMO_USER_ID, current_user, session_token};

const KIND_SEASON: u64 = 1;
const KIND_DRIVER: u64 = 2;
const KIND_RACE: u64 = 3;
const KIND_USER: u64 = 4;
const KIND_PICK: u64 = 5;
const KIND_RESULT: u64 = 6;

/// Stable id for the `n`th fixture of a kind. The kind sits in the high
/// 64 bits so ids never collide across entity kinds.
const fn fixture_id(kind: u64, n: u64) -> Uuid {
    Uuid::from_u128(((kind as u128) << 64) | n as u128)
}
