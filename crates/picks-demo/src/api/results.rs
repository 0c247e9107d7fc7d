//! Race results endpoints.

use picks::models::RaceResult;
use picks::types::{RaceResultsPayload, SubmitResultsResponse, SubmittedResult};
use picks::{ApiResponse, AppError};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::MockApi;

impl MockApi {
    /// Results for a race. Races without classified results return an
    /// empty payload.
    pub async fn race_results(&self, race_id: Uuid) -> ApiResponse<RaceResultsPayload> {
        let data = self.store.dataset().await;
        if let Some(payload) = data.race_results.get(&race_id) {
            return ApiResponse::ok(payload.clone());
        }

        data.race(race_id)
            .map(|race| RaceResultsPayload {
                race: race.clone(),
                results: Vec::new(),
                picks: Vec::new(),
            })
            .ok_or(AppError::RaceNotFound)
            .into()
    }

    /// Accepts an administrator's classification.
    ///
    /// Rows are echoed back as stored results without scoring; the dataset
    /// and the race status are left as they are.
    pub async fn submit_race_results(
        &self,
        race_id: Uuid,
        rows: Vec<SubmittedResult>,
    ) -> ApiResponse<SubmitResultsResponse> {
        let data = self.store.dataset().await;
        let Some(race) = data.race(race_id) else {
            return AppError::RaceNotFound.into();
        };

        let created_at = OffsetDateTime::now_utc();
        let results: Vec<RaceResult> = rows
            .into_iter()
            .map(|row| RaceResult {
                id: Uuid::new_v4(),
                race_id,
                driver_id: row.driver_id,
                race_position: row.race_position,
                sprint_position: row.sprint_position,
                race_points: 0,
                sprint_points: 0,
                created_at,
            })
            .collect();

        info!(
            "Accepted {} results for {} ({})",
            results.len(),
            race.name,
            race.status.as_str()
        );
        ApiResponse::ok(SubmitResultsResponse {
            race_id,
            status: race.status,
            results,
        })
    }
}
