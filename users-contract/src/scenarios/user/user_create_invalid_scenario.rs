use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::info;

use crate::assertions::expect_validation_errors;
use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::scenarios::Scenario;
use crate::types::{CREATE_USER_FIELDS, RunState, UserPayload};

/// Submits an empty body and expects a validation error per required field
pub struct UserCreateInvalidScenario;

#[async_trait]
impl Scenario for UserCreateInvalidScenario {
    fn name(&self) -> &'static str {
        "user_create_invalid"
    }

    fn description(&self) -> &'static str {
        "should return validation errors if no data for creation user"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        let response = client
            .create(&UserPayload::empty())
            .await?
            .expect_status(StatusCode::UNPROCESSABLE_ENTITY)?;

        let errors = expect_validation_errors(&response.body, &CREATE_USER_FIELDS)?;
        info!("Received {} validation errors", errors.len());
        Ok(*state)
    }
}
