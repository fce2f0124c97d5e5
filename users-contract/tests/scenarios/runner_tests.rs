//! End-to-end runs of the scenario sequence

use crate::common::*;
use users_contract::scenarios::{UserDeleteScenario, UserGetScenario};
use users_contract::{ScenarioOutcome, ScenarioRunner};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_default_suite_passes_against_stub() {
    let api = TestApi::start().await;
    let runner = ScenarioRunner::with_default_suite(2);

    let report = runner.run(&api.client()).await;

    assert!(report.all_passed(), "Failures: {:?}", report.failures());
    assert_eq!(report.scenarios.len(), 8);
    assert_eq!(report.passed_count(), 8);
    assert_eq!(report.final_state, RunState::with_user_id(103));

    // The captured user was updated, patched and finally deleted
    assert!(api.api.user(103).is_none());
    // The created user stays behind
    assert!(api.api.user(1000).is_some());
    assert_eq!(api.api.user_count(), SEEDED_IDS.len());
}

#[tokio::test]
async fn test_only_mutating_requests_carry_the_token() {
    let api = TestApi::start().await;
    ScenarioRunner::with_default_suite(2).run(&api.client()).await;

    let received = api.received().await;
    assert!(!received.is_empty());
    for (method, path, authorized) in received {
        let expect_token = method != "GET";
        assert_eq!(
            authorized, expect_token,
            "{method} {path}: authorization header presence"
        );
    }
}

#[tokio::test]
async fn test_listing_failure_does_not_stop_the_run() {
    let api = TestApi::start().await;
    override_route(&api.server, "GET", "/users", ResponseTemplate::new(500)).await;

    let report = ScenarioRunner::with_default_suite(2).run(&api.client()).await;

    assert_eq!(report.scenarios.len(), 8);
    assert_eq!(report.final_state, RunState::new());

    let outcome = |name: &str| report.get(name).unwrap().passed();
    assert!(!outcome("user_list"));
    // Scenarios that need the captured id hit /users/0 and get 404
    assert!(!outcome("user_get"));
    assert!(!outcome("user_update"));
    assert!(!outcome("user_patch"));
    assert!(!outcome("user_delete"));
    // Scenarios that do not need it still pass
    assert!(outcome("user_create"));
    assert!(outcome("user_create_invalid"));
    assert!(outcome("user_delete_missing"));

    let failures = report.failures();
    assert_eq!(failures.len(), 5);
    assert!(failures[1].1.contains("GET /users/0"), "{}", failures[1].1);

    let paths: Vec<String> = api.received().await.into_iter().map(|(_, p, _)| p).collect();
    assert!(paths.contains(&"/users/0".to_string()));
    assert!(api.api.user(103).is_some());
}

#[tokio::test]
async fn test_transport_errors_fail_every_scenario() {
    // Reserve a port, then release it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = Config {
        api_url: format!("http://127.0.0.1:{port}"),
        api_token: Some(TEST_TOKEN.to_string()),
        ..Config::default()
    };
    let client = UsersClient::new(&config).unwrap();

    let report = ScenarioRunner::with_default_suite(2).run(&client).await;

    assert_eq!(report.failed_count(), 8);
    for scenario in &report.scenarios {
        match &scenario.outcome {
            ScenarioOutcome::Failed(message) => {
                assert!(message.starts_with("HTTP request failed"), "{}: {}", scenario.name, message)
            }
            ScenarioOutcome::Passed => panic!("{} should have failed", scenario.name),
        }
    }
}

#[tokio::test]
async fn test_failed_scenario_passes_state_through() {
    let api = TestApi::start().await;
    override_route(&api.server, "GET", "/users/102", ResponseTemplate::new(500)).await;

    let mut runner = ScenarioRunner::new();
    runner.register(UserGetScenario);
    runner.register(UserDeleteScenario);

    let report = runner
        .run_with_state(&api.client(), RunState::with_user_id(102))
        .await;

    assert!(!report.get("user_get").unwrap().passed());
    assert!(report.get("user_delete").unwrap().passed());
    assert_eq!(report.final_state, RunState::with_user_id(102));
    assert!(api.api.user(102).is_none());
}

#[tokio::test]
async fn test_single_scenario_with_seeded_state() {
    let api = TestApi::start().await;
    let mut runner = ScenarioRunner::new();
    runner.register(UserDeleteScenario);

    let report = runner
        .run_with_state(&api.client(), RunState::with_user_id(101))
        .await;

    assert!(report.all_passed(), "Failures: {:?}", report.failures());
    assert!(api.api.user(101).is_none());
}

#[tokio::test]
async fn test_filtered_run_keeps_declaration_order() {
    let api = TestApi::start().await;
    let mut runner = ScenarioRunner::with_default_suite(2);
    runner.retain_only(&["user_get".to_string(), "user_list".to_string()]);

    let report = runner.run(&api.client()).await;

    let names: Vec<&str> = report.scenarios.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["user_list", "user_get"]);
    assert!(report.all_passed(), "Failures: {:?}", report.failures());
    assert_eq!(api.api.user_count(), SEEDED_IDS.len());
}
