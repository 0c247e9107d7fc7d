//! Season and calendar endpoints.

use picks::models::{Race, Season};
use picks::{ApiResponse, AppError};
use uuid::Uuid;

use super::MockApi;

impl MockApi {
    pub async fn season(&self) -> ApiResponse<Season> {
        ApiResponse::ok(self.store.dataset().await.season)
    }

    pub async fn races(&self) -> ApiResponse<Vec<Race>> {
        ApiResponse::ok(self.store.dataset().await.races)
    }

    /// The race picks are open for, or the first race if the stored id no
    /// longer resolves.
    pub async fn current_race(&self) -> ApiResponse<Race> {
        let data = self.store.dataset().await;
        data.current_race()
            .cloned()
            .ok_or(AppError::RaceNotFound)
            .into()
    }

    pub async fn race(&self, race_id: Uuid) -> ApiResponse<Race> {
        let data = self.store.dataset().await;
        data.race(race_id)
            .cloned()
            .ok_or(AppError::RaceNotFound)
            .into()
    }
}
