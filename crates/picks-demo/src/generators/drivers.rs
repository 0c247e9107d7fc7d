//! The ten-driver grid.

use picks::models::Driver;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{KIND_DRIVER, fixture_id};
use crate::generators::SEASON_ID;

struct DriverSpec {
    code: &'static str,
    name: &'static str,
    number: u32,
    team: &'static str,
    color: &'static str,
}

static GRID: [DriverSpec; 10] = [
    DriverSpec { code: "VER", name: "Max Verstappen", number: 1, team: "Red Bull Racing", color: "#3671C6" },
    DriverSpec { code: "NOR", name: "Lando Norris", number: 4, team: "McLaren", color: "#FF8000" },
    DriverSpec { code: "LEC", name: "Charles Leclerc", number: 16, team: "Ferrari", color: "#E8002D" },
    DriverSpec { code: "PIA", name: "Oscar Piastri", number: 81, team: "McLaren", color: "#FF8000" },
    DriverSpec { code: "HAM", name: "Lewis Hamilton", number: 44, team: "Ferrari", color: "#E8002D" },
    DriverSpec { code: "RUS", name: "George Russell", number: 63, team: "Mercedes", color: "#27F4D2" },
    DriverSpec { code: "SAI", name: "Carlos Sainz", number: 55, team: "Williams", color: "#64C4FF" },
    DriverSpec { code: "ALO", name: "Fernando Alonso", number: 14, team: "Aston Martin", color: "#229971" },
    DriverSpec { code: "ANT", name: "Andrea Kimi Antonelli", number: 12, team: "Mercedes", color: "#27F4D2" },
    DriverSpec { code: "TSU", name: "Yuki Tsunoda", number: 22, team: "Red Bull Racing", color: "#3671C6" },
];

/// Id of the driver racing with `number`.
pub const fn driver_id(number: u32) -> Uuid {
    fixture_id(KIND_DRIVER, number as u64)
}

pub fn drivers(created_at: OffsetDateTime) -> Vec<Driver> {
    GRID.iter()
        .map(|spec| Driver {
            id: driver_id(spec.number),
            season_id: SEASON_ID,
            code: spec.code.to_string(),
            name: spec.name.to_string(),
            number: spec.number,
            team_name: spec.team.to_string(),
            team_color: spec.color.to_string(),
            created_at,
        })
        .collect()
}
