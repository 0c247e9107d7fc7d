//! The signed-in player's seeded picks.

use std::collections::BTreeMap;

use picks::models::{Driver, Pick, Race};
use picks::types::RaceResultsPayload;
use time::OffsetDateTime;
use uuid::Uuid;

use super::drivers::driver_id;
use super::races::{LOCKED_ROUND, WILDCARD_ROUND, race_id};
use super::results::points_scored;
use super::{KIND_PICK, fixture_id};
use crate::scenarios::ScenarioId;

struct PickSpec {
    serial: u64,
    round: u32,
    number: u32,
}

/// One pick in each of four rounds. Rounds 1 and 2 are classified, round 4
/// is the next open race and round 5 is the wild card.
static SEEDED: [PickSpec; 4] = [
    PickSpec { serial: 1, round: 1, number: 1 },
    PickSpec { serial: 2, round: 2, number: 4 },
    PickSpec { serial: 3, round: 4, number: 16 },
    PickSpec { serial: 4, round: WILDCARD_ROUND, number: 81 },
];

/// Pick made before qualifying started in the locked round.
static LOCKED: PickSpec = PickSpec { serial: 5, round: LOCKED_ROUND, number: 44 };

/// Picks for the signed-in user. Classified rounds carry the points the
/// picked driver scored.
pub fn seeded_picks(
    scenario: ScenarioId,
    user_id: Uuid,
    drivers: &[Driver],
    races: &[Race],
    results: &BTreeMap<Uuid, RaceResultsPayload>,
    created_at: OffsetDateTime,
) -> Vec<Pick> {
    let specs: Vec<&PickSpec> = match scenario {
        ScenarioId::Fresh => Vec::new(),
        ScenarioId::Locked => SEEDED.iter().chain(std::iter::once(&LOCKED)).collect(),
        ScenarioId::Showcase | ScenarioId::Admin => SEEDED.iter().collect(),
    };

    specs
        .into_iter()
        .filter_map(|spec| {
            let race = races.iter().find(|r| r.id == race_id(spec.round))?;
            let driver = drivers.iter().find(|d| d.id == driver_id(spec.number))?;
            let points = results
                .get(&race.id)
                .and_then(|payload| points_scored(&payload.results, driver.id));

            Some(Pick {
                id: fixture_id(KIND_PICK, spec.serial),
                user_id,
                race_id: race.id,
                driver_id: driver.id,
                created_at,
                driver: Some(driver.clone()),
                race: Some(race.clone()),
                points,
                user_name: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{DEMO_USER_ID, drivers, race_results, races};

    fn picks_for(scenario: ScenarioId) -> Vec<Pick> {
        let now = OffsetDateTime::now_utc();
        let drivers = drivers(now);
        let races = races(now, now);
        let results = race_results(&drivers, &races, now);
        seeded_picks(scenario, DEMO_USER_ID, &drivers, &races, &results, now)
    }

    #[test]
    fn test_fresh_has_no_picks() {
        assert!(picks_for(ScenarioId::Fresh).is_empty());
    }

    #[test]
    fn test_four_picks_in_four_rounds() {
        let picks = picks_for(ScenarioId::Showcase);
        assert_eq!(picks.len(), 4);

        let mut rounds: Vec<u32> = picks
            .iter()
            .map(|p| p.race.as_ref().unwrap().round)
            .collect();
        rounds.dedup();
        assert_eq!(rounds, vec![1, 2, 4, WILDCARD_ROUND]);
    }

    #[test]
    fn test_points_only_on_classified_rounds() {
        let picks = picks_for(ScenarioId::Showcase);
        let points: Vec<Option<i32>> = picks.iter().map(|p| p.points).collect();
        assert_eq!(points, vec![Some(25), Some(20), None, None]);
    }

    #[test]
    fn test_locked_adds_pick_for_locked_round() {
        let picks = picks_for(ScenarioId::Locked);
        assert_eq!(picks.len(), 5);
        assert!(picks.iter().any(|p| p.race_id == race_id(LOCKED_ROUND)));
    }
}
