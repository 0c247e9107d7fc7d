//! Pick endpoints.

use picks::models::Pick;
use picks::types::CreatePickRequest;
use picks::{ApiResponse, AppError};
use tracing::{debug, info};

use super::MockApi;
use crate::dataset::DemoData;

impl MockApi {
    /// The signed-in user's picks, enriched with driver and race.
    pub async fn picks(&self) -> ApiResponse<Vec<Pick>> {
        let data = self.store.dataset().await;
        let user_id = data.user.id;
        ApiResponse::ok(
            data.picks
                .into_iter()
                .filter(|p| p.user_id == user_id)
                .collect(),
        )
    }

    /// Creates the user's pick for a race, replacing any earlier pick for
    /// that race.
    ///
    /// Unknown race or driver ids leave the dataset untouched; the call then
    /// reports that no pick could be created.
    pub async fn create_pick(&self, request: CreatePickRequest) -> ApiResponse<Pick> {
        let CreatePickRequest { race_id, driver_id } = request;

        let data = self
            .store
            .update_dataset(|data| {
                let (Some(race), Some(driver)) = (data.race(race_id), data.driver(driver_id))
                else {
                    debug!("Ignoring pick for unknown race {race_id} or driver {driver_id}");
                    return data;
                };

                let pick = Pick::new(data.user.id, race, driver);
                let user_id = data.user.id;
                let picks = data
                    .picks
                    .iter()
                    .filter(|p| !(p.race_id == race_id && p.user_id == user_id))
                    .cloned()
                    .chain(std::iter::once(pick))
                    .collect();

                DemoData { picks, ..data }
            })
            .await;

        match data.user_pick_for(race_id) {
            Some(pick) => {
                info!("Stored pick {} for race {race_id}", pick.id);
                ApiResponse::ok(pick.clone())
            }
            None => AppError::PickNotCreated.into(),
        }
    }
}
