//! Standings endpoint.

use picks::ApiResponse;
use picks::models::LeaderboardEntry;

use super::MockApi;

impl MockApi {
    pub async fn leaderboard(&self) -> ApiResponse<Vec<LeaderboardEntry>> {
        ApiResponse::ok(self.store.dataset().await.leaderboard)
    }
}
