use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::info;

use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::scenarios::Scenario;
use crate::types::RunState;

pub struct UserDeleteScenario;

#[async_trait]
impl Scenario for UserDeleteScenario {
    fn name(&self) -> &'static str {
        "user_delete"
    }

    fn description(&self) -> &'static str {
        "should delete user"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        let user_id = state.user_path_segment();
        info!("Deleting user {}", user_id);
        client
            .delete(&user_id)
            .await?
            .expect_status(StatusCode::NO_CONTENT)?;
        Ok(*state)
    }
}
