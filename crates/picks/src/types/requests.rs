//! Request bodies for API endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration form. Every field is optional so partial profiles can be
/// merged into an existing account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Body for creating or replacing a pick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreatePickRequest {
    pub race_id: Uuid,
    pub driver_id: Uuid,
}

/// One finishing row entered by an administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedResult {
    pub driver_id: Uuid,
    #[serde(default)]
    pub race_position: Option<u32>,
    #[serde(default)]
    pub sprint_position: Option<u32>,
}
