//! Classified results for the completed rounds.

use std::collections::BTreeMap;

use picks::models::{Driver, Pick, Race, RaceResult};
use picks::scoring::points_for_position;
use picks::types::RaceResultsPayload;
use time::OffsetDateTime;
use uuid::Uuid;

use super::drivers::driver_id;
use super::races::race_id;
use super::users::RIVALS;
use super::{KIND_PICK, KIND_RESULT, fixture_id};

/// Finishing order for a round, by car number.
struct Classification {
    round: u32,
    order: [u32; 10],
    /// `(rival index, car number)` for rivals whose picks are published.
    rival_picks: &'static [(usize, u32)],
}

static CLASSIFICATIONS: [Classification; 2] = [
    Classification {
        round: 1,
        order: [1, 4, 16, 81, 44, 63, 55, 14, 12, 22],
        rival_picks: &[(0, 4), (1, 16), (2, 81), (3, 44), (4, 63)],
    },
    Classification {
        round: 2,
        order: [81, 4, 1, 16, 63, 44, 12, 55, 14, 22],
        rival_picks: &[],
    },
];

/// Results payloads for every classified round, keyed by race id.
pub fn race_results(
    drivers: &[Driver],
    races: &[Race],
    created_at: OffsetDateTime,
) -> BTreeMap<Uuid, RaceResultsPayload> {
    CLASSIFICATIONS
        .iter()
        .filter_map(|classification| {
            let race = races.iter().find(|r| r.id == race_id(classification.round))?;
            let results = classify(classification, race, created_at);
            let picks = classification
                .rival_picks
                .iter()
                .filter_map(|&(rival, number)| {
                    rival_pick(rival, number, race, drivers, &results, created_at)
                })
                .collect();

            Some((
                race.id,
                RaceResultsPayload {
                    race: race.clone(),
                    results,
                    picks,
                },
            ))
        })
        .collect()
}

/// Total points a driver scored in a set of results.
pub fn points_scored(results: &[RaceResult], driver_id: Uuid) -> Option<i32> {
    results
        .iter()
        .find(|r| r.driver_id == driver_id)
        .map(|r| r.race_points + r.sprint_points)
}

fn classify(
    classification: &Classification,
    race: &Race,
    created_at: OffsetDateTime,
) -> Vec<RaceResult> {
    classification
        .order
        .iter()
        .zip(1u32..)
        .map(|(&number, position)| RaceResult {
            id: fixture_id(KIND_RESULT, u64::from(classification.round * 100 + position)),
            race_id: race.id,
            driver_id: driver_id(number),
            race_position: Some(position),
            sprint_position: None,
            race_points: points_for_position(position),
            sprint_points: 0,
            created_at,
        })
        .collect()
}

fn rival_pick(
    rival_index: usize,
    number: u32,
    race: &Race,
    drivers: &[Driver],
    results: &[RaceResult],
    created_at: OffsetDateTime,
) -> Option<Pick> {
    let rival = RIVALS.get(rival_index)?;
    let driver = drivers.iter().find(|d| d.id == driver_id(number))?;
    let serial = 1000 + u64::from(race.round) * 10 + rival_index as u64;

    Some(Pick {
        id: fixture_id(KIND_PICK, serial),
        user_id: rival.id,
        race_id: race.id,
        driver_id: driver.id,
        created_at,
        driver: Some(driver.clone()),
        race: Some(race.clone()),
        points: Some(points_scored(results, driver.id).unwrap_or(0)),
        user_name: Some(rival.name.to_string()),
    })
}
