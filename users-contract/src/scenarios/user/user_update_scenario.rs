use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::info;

use crate::assertions::expect_payload_echoed;
use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::scenarios::Scenario;
use crate::types::{Gender, RunState, UserPayload, UserStatus, unique_email};

/// Replaces every field of the captured user
pub struct UserUpdateScenario;

impl UserUpdateScenario {
    pub fn payload() -> UserPayload {
        UserPayload::empty()
            .with_name("newName")
            .with_gender(Gender::Female)
            .with_email(unique_email())
            .with_status(UserStatus::Inactive)
    }
}

#[async_trait]
impl Scenario for UserUpdateScenario {
    fn name(&self) -> &'static str {
        "user_update"
    }

    fn description(&self) -> &'static str {
        "should update user"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        let user_id = state.user_path_segment();
        info!("Updating user {}", user_id);

        let payload = Self::payload();
        let response = client
            .update(&user_id, &payload)
            .await?
            .expect_status(StatusCode::OK)?;
        expect_payload_echoed(&response.body, &payload)?;

        Ok(*state)
    }
}
