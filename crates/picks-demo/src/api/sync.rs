//! Results sync endpoint.

use picks::ApiResponse;
use picks::types::SyncResponse;

use super::MockApi;

impl MockApi {
    /// Pretends to pull results from the timing provider. Nothing changes.
    pub async fn trigger_sync(&self) -> ApiResponse<SyncResponse> {
        ApiResponse::ok(SyncResponse {
            success: true,
            message: "Sync completed".to_string(),
            races_synced: 0,
            results_synced: 0,
        })
    }
}
