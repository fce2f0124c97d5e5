use async_trait::async_trait;
use reqwest::StatusCode;

use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::scenarios::Scenario;
use crate::types::RunState;

/// Id that can never name a user: the API only issues numeric ids
pub const MISSING_USER_ID: &str = "userId";

pub struct UserDeleteMissingScenario;

#[async_trait]
impl Scenario for UserDeleteMissingScenario {
    fn name(&self) -> &'static str {
        "user_delete_missing"
    }

    fn description(&self) -> &'static str {
        "should return not found status if user to delete not exists"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        client
            .delete(MISSING_USER_ID)
            .await?
            .expect_status(StatusCode::NOT_FOUND)?;
        Ok(*state)
    }
}
