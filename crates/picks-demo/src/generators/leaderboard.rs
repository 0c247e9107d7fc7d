//! Season standings.

use picks::models::{LeaderboardEntry, User};

use super::users::RIVALS;
use crate::scenarios::ScenarioId;

/// Rounds classified so far.
const RACES_COMPLETED: u32 = 2;

/// Standings table as `(rival index or None for the signed-in user, points)`,
/// already in rank order.
static STANDINGS: [(Option<usize>, i32); 6] = [
    (Some(0), 50),
    (None, 45),
    (Some(1), 40),
    (Some(2), 35),
    (Some(3), 25),
    (Some(4), 15),
];

/// Standings with ranks assigned from table order. A fresh account sits
/// alone at the top with nothing scored.
pub fn leaderboard(scenario: ScenarioId, user: &User) -> Vec<LeaderboardEntry> {
    if scenario == ScenarioId::Fresh {
        return vec![LeaderboardEntry {
            rank: 1,
            user_id: user.id,
            user_name: user.name.clone(),
            total_points: 0,
            races_completed: 0,
        }];
    }

    STANDINGS
        .iter()
        .zip(1u32..)
        .filter_map(|(&(who, total_points), rank)| {
            let (user_id, user_name) = match who {
                Some(idx) => {
                    let rival = RIVALS.get(idx)?;
                    (rival.id, rival.name.to_string())
                }
                None => (user.id, user.name.clone()),
            };
            Some(LeaderboardEntry {
                rank,
                user_id,
                user_name,
                total_points,
                races_completed: RACES_COMPLETED,
            })
        })
        .collect()
}
