//! Response types for API endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Driver, Pick, Race, RaceResult, RaceStatus, User};

/// Uniform envelope returned by every endpoint.
///
/// Serializes as `{"data": ...}` on success and `{"error": "..."}` on
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Data(T),
    Error(String),
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse::Data(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Data(data) => Some(data),
            ApiResponse::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResponse::Data(_) => None,
            ApiResponse::Error(message) => Some(message),
        }
    }

    /// Converts the envelope into a `Result`, keeping the error message.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResponse::Data(data) => Ok(data),
            ApiResponse::Error(message) => Err(message),
        }
    }
}

impl<T> From<Result<T, AppError>> for ApiResponse<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => ApiResponse::Data(data),
            Err(err) => err.into(),
        }
    }
}

/// Session token plus the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// A driver annotated with whether it can be picked for a given race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverAvailability {
    #[serde(flatten)]
    pub driver: Driver,
    pub available: bool,
}

/// Driver availability for one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableDrivers {
    pub race_id: Uuid,
    pub drivers: Vec<DriverAvailability>,
    /// Drivers already used by the user in other non-wild-card races.
    pub used_driver_ids: Vec<Uuid>,
}

/// Classified results of a race together with the picks made for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResultsPayload {
    pub race: Race,
    pub results: Vec<RaceResult>,
    pub picks: Vec<Pick>,
}

/// Acknowledgement of an administrator's results submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResultsResponse {
    pub race_id: Uuid,
    pub status: RaceStatus,
    pub results: Vec<RaceResult>,
}

/// Outcome of a results sync with the timing provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub success: bool,
    pub message: String,
    pub races_synced: u32,
    pub results_synced: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shapes() {
        let ok = serde_json::to_value(ApiResponse::ok(7)).unwrap();
        assert_eq!(ok, serde_json::json!({ "data": 7 }));

        let err = serde_json::to_value(ApiResponse::<u32>::error("Race not found")).unwrap();
        assert_eq!(err, serde_json::json!({ "error": "Race not found" }));
    }

    #[test]
    fn test_envelope_from_result() {
        let ok: ApiResponse<&str> = Ok("pick").into();
        assert_eq!(ok.data(), Some(&"pick"));
        assert!(!ok.is_error());

        let err: ApiResponse<&str> = Err(AppError::PickNotCreated).into();
        assert!(err.is_error());
        assert_eq!(err.into_result(), Err("Failed to create pick".to_string()));
    }
}
