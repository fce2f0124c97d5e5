use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::info;

use crate::assertions::{expect_payload_echoed, record_id};
use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::scenarios::Scenario;
use crate::types::{Gender, RunState, UserPayload, UserStatus, unique_email};

/// Creates a user and reads it back by its new id
pub struct UserCreateScenario;

impl UserCreateScenario {
    pub fn payload() -> UserPayload {
        UserPayload::empty()
            .with_email(unique_email())
            .with_name("Name")
            .with_gender(Gender::Male)
            .with_status(UserStatus::Active)
    }
}

#[async_trait]
impl Scenario for UserCreateScenario {
    fn name(&self) -> &'static str {
        "user_create"
    }

    fn description(&self) -> &'static str {
        "should create a user"
    }

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState> {
        let payload = Self::payload();
        info!("Creating user with email {:?}", payload.email);

        let created = client.create(&payload).await?.expect_status(StatusCode::CREATED)?;
        expect_payload_echoed(&created.body, &payload)?;

        let new_id = record_id(&created.body)?;
        info!("Created user {}, reading it back", new_id);
        let fetched = client
            .get(&new_id.to_string())
            .await?
            .expect_status(StatusCode::OK)?;
        expect_payload_echoed(&fetched.body, &payload)?;

        Ok(*state)
    }
}
