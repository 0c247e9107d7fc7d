//! Driver endpoints.

use std::collections::HashSet;

use picks::models::{Driver, Pick, Race};
use picks::types::{AvailableDrivers, DriverAvailability};
use picks::{ApiResponse, AppError};
use uuid::Uuid;

use super::MockApi;

impl MockApi {
    pub async fn drivers(&self) -> ApiResponse<Vec<Driver>> {
        ApiResponse::ok(self.store.dataset().await.drivers)
    }

    /// Every driver flagged with whether the user can still pick them for
    /// the current race.
    pub async fn available_drivers(&self) -> ApiResponse<AvailableDrivers> {
        let data = self.store.dataset().await;
        let Some(race) = data.current_race() else {
            return AppError::RaceNotFound.into();
        };

        let used = used_driver_ids(&data.picks, &data.races, data.user.id, race.id);
        let used_set: HashSet<Uuid> = used.iter().copied().collect();
        let drivers = data
            .drivers
            .iter()
            .map(|driver| DriverAvailability {
                driver: driver.clone(),
                available: !used_set.contains(&driver.id),
            })
            .collect();

        ApiResponse::ok(AvailableDrivers {
            race_id: race.id,
            drivers,
            used_driver_ids: used,
        })
    }
}

/// Drivers the user has already spent on other races. Wild-card races are
/// exempt, and so is the race being picked for.
pub(crate) fn used_driver_ids(
    picks: &[Pick],
    races: &[Race],
    user_id: Uuid,
    race_id: Uuid,
) -> Vec<Uuid> {
    let wildcards: HashSet<Uuid> = races
        .iter()
        .filter(|r| r.is_wildcard)
        .map(|r| r.id)
        .collect();

    let mut used = Vec::new();
    for pick in picks {
        if pick.user_id != user_id || pick.race_id == race_id || wildcards.contains(&pick.race_id) {
            continue;
        }
        if !used.contains(&pick.driver_id) {
            used.push(pick.driver_id);
        }
    }
    used
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::DatasetBuilder;
    use crate::generators::{driver_id, race_id};
    use crate::scenarios::ScenarioId;

    #[test]
    fn test_used_drivers_skip_current_and_wildcard() {
        let data = DatasetBuilder::new(ScenarioId::Showcase).build();
        let used = used_driver_ids(&data.picks, &data.races, data.user.id, race_id(4));

        // Round 1 VER and round 2 NOR count; round 4 is being picked for,
        // round 5 is the wild card
        assert_eq!(used, vec![driver_id(1), driver_id(4)]);
    }

    #[test]
    fn test_other_users_picks_ignored() {
        let data = DatasetBuilder::new(ScenarioId::Showcase).build();
        let used = used_driver_ids(&data.picks, &data.races, Uuid::new_v4(), race_id(4));
        assert!(used.is_empty());
    }
}
