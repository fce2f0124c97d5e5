//! Tests for fetching a single user

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::*;
use serde_json::json;
use users_contract::scenarios::UserGetScenario;
use users_contract::Scenario;
use wiremock::matchers::{method, path};
use wiremock::{Mock, Request, Respond, ResponseTemplate};

/// Answers with a different name on every call
struct ChangingName {
    calls: AtomicUsize,
}

impl Respond for ChangingName {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(json!({
            "id": 102,
            "name": format!("Name {call}"),
            "email": "seed102@example.com",
            "gender": "female",
            "status": "active"
        }))
    }
}

#[tokio::test]
async fn test_get_captured_user() {
    let api = TestApi::start().await;

    let state = UserGetScenario
        .run(&api.client(), &RunState::with_user_id(102))
        .await
        .expect("Fetching a seeded user should pass");
    assert_eq!(state, RunState::with_user_id(102));

    let received = api.received().await;
    assert_eq!(received.len(), 2, "the user is read twice");
    assert!(received.iter().all(|(m, p, auth)| m == "GET" && p == "/users/102" && !auth));
}

#[tokio::test]
async fn test_get_without_captured_id_hits_not_found() {
    let api = TestApi::start().await;

    let err = expect_failure(UserGetScenario.run(&api.client(), &RunState::new()).await);
    match err {
        ScenarioError::UnexpectedStatus { request, expected, actual, .. } => {
            assert_eq!(request, "GET /users/0");
            assert_eq!(expected, 200);
            assert_eq!(actual, 404);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_get_rejects_mismatched_id() {
    let api = TestApi::start().await;
    override_route(
        &api.server,
        "GET",
        "/users/102",
        ResponseTemplate::new(200).set_body_json(json!({
            "id": 999,
            "name": "Other",
            "email": "other@example.com",
            "gender": "male",
            "status": "active"
        })),
    )
    .await;

    let err = expect_failure(UserGetScenario.run(&api.client(), &RunState::with_user_id(102)).await);
    assert!(
        matches!(err, ScenarioError::FieldMismatch { ref field, .. } if field == "id"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_get_detects_non_idempotent_reads() {
    let api = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/users/102"))
        .respond_with(ChangingName {
            calls: AtomicUsize::new(0),
        })
        .with_priority(1)
        .mount(&api.server)
        .await;

    let err = expect_failure(UserGetScenario.run(&api.client(), &RunState::with_user_id(102)).await);
    match err {
        ScenarioError::FieldMismatch { field, expected, actual } => {
            assert_eq!(field, "name");
            assert_eq!(expected, json!("Name 0"));
            assert_eq!(actual, json!("Name 1"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
