use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::info;

use crate::assertions::{expect_fields_unchanged, expect_payload_echoed};
use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::scenarios::Scenario;
use crate::types::{Gender, RunState, UserPayload};

/// Patches name and gender, leaving email and status alone
pub struct UserPatchScenario;

impl UserPatchScenario {
    pub fn payload() -> UserPayload {
        UserPayload::empty()
            .with_name("newName")
            .with_gender(Gender::Female)
    }
}

#[async_trait]
impl Scenario for UserPatchScenario {
    fn name(&self) -> &'static str {
        "user_patch"
    }

    fn description(&self) -> &'static str {
        "should partially update user"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        let user_id = state.user_path_segment();
        let payload = Self::payload();

        let before = client.get(&user_id).await?.expect_status(StatusCode::OK)?;

        info!("Patching user {}", user_id);
        let patched = client
            .patch(&user_id, &payload)
            .await?
            .expect_status(StatusCode::OK)?;
        expect_payload_echoed(&patched.body, &payload)?;
        expect_fields_unchanged(&before.body, &patched.body, &payload.omitted_fields())?;

        Ok(*state)
    }
}
