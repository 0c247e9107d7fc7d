//! Scenario switcher endpoints.

use picks::ApiResponse;

use super::MockApi;
use crate::scenarios::{SCENARIOS, ScenarioDescriptor, ScenarioId};

impl MockApi {
    pub async fn scenarios(&self) -> ApiResponse<Vec<ScenarioDescriptor>> {
        ApiResponse::ok(SCENARIOS.to_vec())
    }

    pub async fn active_scenario(&self) -> ApiResponse<ScenarioDescriptor> {
        let scenario = self.store.active_scenario().await;
        ApiResponse::ok(*scenario.descriptor())
    }

    pub async fn switch_scenario(&self, scenario: ScenarioId) -> ApiResponse<ScenarioDescriptor> {
        self.store.set_active_scenario(scenario).await;
        ApiResponse::ok(*scenario.descriptor())
    }

    /// Throws away changes made in a scenario (the active one by default).
    pub async fn reset_scenario(
        &self,
        scenario: Option<ScenarioId>,
    ) -> ApiResponse<ScenarioDescriptor> {
        let scenario = self.store.reset_scenario_data(scenario).await;
        ApiResponse::ok(*scenario.descriptor())
    }
}
