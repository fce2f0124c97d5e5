//! Tests for deletion of existing and missing users

use crate::common::*;
use users_contract::scenarios::{UserDeleteMissingScenario, UserDeleteScenario};
use users_contract::Scenario;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_delete_user_success() {
    let api = TestApi::start().await;

    UserDeleteScenario
        .run(&api.client(), &RunState::with_user_id(101))
        .await
        .expect("Delete should pass");

    assert!(api.api.user(101).is_none());
    let received = api.received().await;
    assert_eq!(received, vec![("DELETE".to_string(), "/users/101".to_string(), true)]);
}

#[tokio::test]
async fn test_delete_user_twice_fails_second_time() {
    let api = TestApi::start().await;
    let client = api.client();
    let state = RunState::with_user_id(101);

    UserDeleteScenario.run(&client, &state).await.expect("First delete should pass");
    let err = expect_failure(UserDeleteScenario.run(&client, &state).await);
    assert!(
        matches!(err, ScenarioError::UnexpectedStatus { expected: 204, actual: 404, .. }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_delete_user_without_token_is_rejected() {
    let api = TestApi::start().await;

    let err = expect_failure(
        UserDeleteScenario
            .run(&api.client_without_token(), &RunState::with_user_id(101))
            .await,
    );
    assert!(
        matches!(err, ScenarioError::UnexpectedStatus { expected: 204, actual: 401, .. }),
        "unexpected error: {err}"
    );
    assert!(api.api.user(101).is_some());
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let api = TestApi::start().await;

    UserDeleteMissingScenario
        .run(&api.client(), &RunState::new())
        .await
        .expect("Deleting a malformed id should return 404");

    let received = api.received().await;
    assert_eq!(received, vec![("DELETE".to_string(), "/users/userId".to_string(), true)]);
    assert_eq!(api.api.user_count(), SEEDED_IDS.len());
}

#[tokio::test]
async fn test_delete_missing_user_accepted_is_a_failure() {
    let api = TestApi::start().await;
    override_route(&api.server, "DELETE", "/users/userId", ResponseTemplate::new(204)).await;

    let err = expect_failure(UserDeleteMissingScenario.run(&api.client(), &RunState::new()).await);
    assert!(
        matches!(err, ScenarioError::UnexpectedStatus { expected: 404, actual: 204, .. }),
        "unexpected error: {err}"
    );
}
