//! JSON shapes the picks client depends on.

use picks::ApiResponse;
use picks::models::{Driver, Pick, Race, RaceStatus};
use picks::types::{AvailableDrivers, DriverAvailability};
use time::macros::datetime;
use uuid::Uuid;

fn race() -> Race {
    Race {
        id: Uuid::from_u128(3),
        season_id: Uuid::from_u128(1),
        round: 3,
        name: "Miami Grand Prix".to_string(),
        location: "Miami".to_string(),
        circuit: "Miami International Autodrome".to_string(),
        country_code: "US".to_string(),
        is_sprint: true,
        qualifying_time: Some(datetime!(2025-05-03 20:00 UTC)),
        sprint_qualifying_time: Some(datetime!(2025-05-02 20:30 UTC)),
        race_time: Some(datetime!(2025-05-04 20:00 UTC)),
        sprint_time: Some(datetime!(2025-05-03 16:00 UTC)),
        is_wildcard: false,
        status: RaceStatus::InProgress,
        created_at: datetime!(2025-01-01 00:00 UTC),
    }
}

fn driver() -> Driver {
    Driver {
        id: Uuid::from_u128(44),
        season_id: Uuid::from_u128(1),
        code: "HAM".to_string(),
        name: "Lewis Hamilton".to_string(),
        number: 44,
        team_name: "Ferrari".to_string(),
        team_color: "#E8002D".to_string(),
        created_at: datetime!(2025-01-01 00:00 UTC),
    }
}

#[test]
fn test_race_timestamps_are_rfc3339() {
    let value = serde_json::to_value(race()).unwrap();
    assert_eq!(value["race_time"], "2025-05-04T20:00:00Z");
    assert_eq!(value["status"], "in_progress");

    let mut without_sprint = race();
    without_sprint.sprint_time = None;
    let value = serde_json::to_value(&without_sprint).unwrap();
    assert!(value["sprint_time"].is_null());

    let parsed: Race = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, without_sprint);
}

#[test]
fn test_enriched_pick_embeds_driver_and_race() {
    let pick = Pick::new(Uuid::from_u128(7), &race(), &driver());
    let value = serde_json::to_value(&pick).unwrap();

    assert_eq!(value["driver"]["code"], "HAM");
    assert_eq!(value["race"]["round"], 3);
    assert!(value.get("points").is_none());
}

#[test]
fn test_driver_availability_is_flattened() {
    let payload = AvailableDrivers {
        race_id: Uuid::from_u128(3),
        drivers: vec![DriverAvailability {
            driver: driver(),
            available: false,
        }],
        used_driver_ids: vec![Uuid::from_u128(44)],
    };

    let value = serde_json::to_value(ApiResponse::ok(payload)).unwrap();
    let first = &value["data"]["drivers"][0];
    assert_eq!(first["code"], "HAM");
    assert_eq!(first["available"], false);
}
