use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::info;

use crate::assertions::{expect_array, expect_len, record_id, require_fields};
use crate::client::UsersClient;
use crate::error::{ScenarioError, ScenarioResult};
use crate::scenarios::Scenario;
use crate::types::{RunState, USER_FIELDS, User};

/// Lists one page of users and captures the first id for later scenarios
pub struct UserListScenario {
    per_page: u32,
}

impl UserListScenario {
    pub fn new(per_page: u32) -> Self {
        Self { per_page }
    }
}

#[async_trait]
impl Scenario for UserListScenario {
    fn name(&self) -> &'static str {
        "user_list"
    }

    fn description(&self) -> &'static str {
        "should return a list of users"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        info!("Listing users with per_page={}", self.per_page);
        let response = client.list(self.per_page).await?.expect_status(StatusCode::OK)?;

        let users = expect_array(&response.body)?;
        expect_len(users, self.per_page as usize)?;
        for user in users {
            require_fields(user, &USER_FIELDS)?;
            serde_json::from_value::<User>(user.clone()).map_err(|e| {
                ScenarioError::UnexpectedShape {
                    expected: "user record",
                    actual: e.to_string(),
                }
            })?;
        }

        let first_id = match users.first() {
            Some(first) => record_id(first)?,
            None => return Ok(*state),
        };
        info!("Captured user id {} for subsequent scenarios", first_id);
        Ok(state.capture_user_id(first_id))
    }
}
