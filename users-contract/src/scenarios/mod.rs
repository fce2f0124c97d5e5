mod user;

pub use user::{
    UserCreateInvalidScenario, UserCreateScenario, UserDeleteMissingScenario, UserDeleteScenario,
    UserGetScenario, UserListScenario, UserPatchScenario, UserUpdateScenario,
};

use async_trait::async_trait;

use crate::client::UsersClient;
use crate::error::ScenarioResult;
use crate::types::RunState;

/// One ordered request/assertion step of the contract suite.
///
/// A scenario receives the state left by the scenarios before it and returns
/// the state for the scenarios after it. A failed scenario produces no new
/// state; the runner keeps passing along the previous one.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Stable name used for filtering and reporting
    fn name(&self) -> &'static str;

    /// Human readable description
    fn description(&self) -> &'static str;

    async fn run(&self, client: &UsersClient, state: &RunState) -> ScenarioResult<RunState>;
}

/// The full users suite in execution order
pub fn default_scenarios(per_page: u32) -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(UserListScenario::new(per_page)),
        Box::new(UserGetScenario),
        Box::new(UserCreateScenario),
        Box::new(UserCreateInvalidScenario),
        Box::new(UserUpdateScenario),
        Box::new(UserPatchScenario),
        Box::new(UserDeleteScenario),
        Box::new(UserDeleteMissingScenario),
    ]
}
