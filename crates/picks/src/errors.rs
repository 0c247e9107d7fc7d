use thiserror::Error;
use tracing::debug;

use crate::types::ApiResponse;

/// Failures reported across the API boundary.
///
/// The display string is the message carried in the `{"error": ...}`
/// envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Race not found")]
    RaceNotFound,

    #[error("Failed to create pick")]
    PickNotCreated,
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        debug!("API error: {err}");
        ApiResponse::Error(err.to_string())
    }
}
