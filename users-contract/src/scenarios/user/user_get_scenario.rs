use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use tracing::info;

use crate::assertions::{expect_field, expect_same_record, require_fields};
use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::scenarios::Scenario;
use crate::types::{RunState, USER_FIELDS};

/// Fetches the captured user, twice, and checks both reads agree
pub struct UserGetScenario;

#[async_trait]
impl Scenario for UserGetScenario {
    fn name(&self) -> &'static str {
        "user_get"
    }

    fn description(&self) -> &'static str {
        "should get details of user"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        let user_id = state.user_path_segment();
        info!("Fetching user {}", user_id);

        let first = client.get(&user_id).await?.expect_status(StatusCode::OK)?;
        require_fields(&first.body, &USER_FIELDS)?;
        expect_field(&first.body, "id", &json!(state.current_user_id().unwrap_or(0)))?;

        let second = client.get(&user_id).await?.expect_status(StatusCode::OK)?;
        expect_same_record(&first.body, &second.body, &USER_FIELDS)?;

        Ok(*state)
    }
}
