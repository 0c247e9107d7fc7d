//! The signed-in player and the rivals they race against.

use picks::models::User;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{KIND_USER, fixture_id};
use crate::scenarios::ScenarioId;

pub const DEMO_USER_ID: Uuid = fixture_id(KIND_USER, 1);

/// A rival player appearing on the leaderboard and in results.
#[derive(Debug, Clone, Copy)]
pub struct Rival {
    pub id: Uuid,
    pub name: &'static str,
}

pub static RIVALS: [Rival; 5] = [
    Rival { id: fixture_id(KIND_USER, 2), name: "Sofia Marquez" },
    Rival { id: fixture_id(KIND_USER, 3), name: "Jamie Chen" },
    Rival { id: fixture_id(KIND_USER, 4), name: "Priya Natarajan" },
    Rival { id: fixture_id(KIND_USER, 5), name: "Tom Becker" },
    Rival { id: fixture_id(KIND_USER, 6), name: "Lena Fischer" },
];

/// The signed-in user. The admin scenario signs in as the league
/// commissioner instead of the regular player.
pub fn current_user(scenario: ScenarioId, created_at: OffsetDateTime) -> User {
    let (email, name, is_admin) = match scenario {
        ScenarioId::Admin => ("admin@paddockpicks.test", "Race Control", true),
        _ => ("demo@paddockpicks.test", "Alex Morgan", false),
    };

    User {
        id: DEMO_USER_ID,
        email: email.to_string(),
        name: name.to_string(),
        is_admin,
        created_at,
    }
}

pub fn session_token(scenario: ScenarioId) -> String {
    format!("demo-token-{scenario}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_identity() {
        let now = OffsetDateTime::now_utc();
        let admin = current_user(ScenarioId::Admin, now);
        let player = current_user(ScenarioId::Showcase, now);

        assert!(admin.is_admin);
        assert!(!player.is_admin);
        assert_ne!(admin.name, player.name);
        assert_eq!(admin.id, player.id);
    }

    #[test]
    fn test_rivals_are_not_the_demo_user() {
        assert!(RIVALS.iter().all(|r| r.id != DEMO_USER_ID));
    }
}
