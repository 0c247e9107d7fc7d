//! Session endpoints. Credentials are not checked: every login signs in as
//! the scenario's user.

use picks::ApiResponse;
use picks::models::User;
use picks::types::{AuthResponse, LoginRequest, RegisterRequest};
use tracing::info;

use super::MockApi;
use crate::dataset::DemoData;

fn auth_response(data: DemoData) -> AuthResponse {
    AuthResponse {
        token: data.token,
        user: data.user,
    }
}

impl MockApi {
    pub async fn login(&self, request: LoginRequest) -> ApiResponse<AuthResponse> {
        info!("Demo login as {}", request.email);
        ApiResponse::ok(auth_response(self.store.dataset().await))
    }

    /// Merges the submitted profile fields into the scenario's user.
    pub async fn register(&self, request: RegisterRequest) -> ApiResponse<AuthResponse> {
        let data = self
            .store
            .update_dataset(|data| {
                let user = User {
                    email: request.email.unwrap_or_else(|| data.user.email.clone()),
                    name: request.name.unwrap_or_else(|| data.user.name.clone()),
                    ..data.user.clone()
                };
                DemoData { user, ..data }
            })
            .await;
        ApiResponse::ok(auth_response(data))
    }

    pub async fn logout(&self) -> ApiResponse<()> {
        ApiResponse::ok(())
    }

    pub async fn current_user(&self) -> ApiResponse<User> {
        ApiResponse::ok(self.store.dataset().await.user)
    }
}
