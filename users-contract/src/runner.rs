use std::time::{Duration, Instant};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::client::UsersClient;
use crate::scenarios::{Scenario, default_scenarios};
use crate::types::RunState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Passed,
    Failed(String),
}

/// Result of one scenario within a run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub description: &'static str,
    pub outcome: ScenarioOutcome,
    pub elapsed: Duration,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.outcome == ScenarioOutcome::Passed
    }
}

/// Result of a whole run, scenarios in execution order
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub scenarios: Vec<ScenarioReport>,
    /// State left after the last scenario
    pub final_state: RunState,
}

impl RunReport {
    pub fn passed_count(&self) -> usize {
        self.scenarios.iter().filter(|s| s.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.scenarios.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioReport::passed)
    }

    /// Failed scenarios paired with their failure message
    pub fn failures(&self) -> Vec<(&'static str, &str)> {
        self.scenarios
            .iter()
            .filter_map(|s| match &s.outcome {
                ScenarioOutcome::Failed(message) => Some((s.name, message.as_str())),
                ScenarioOutcome::Passed => None,
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioReport> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}

/// Runs an ordered list of scenarios one at a time.
///
/// A failing scenario does not stop the run: it is recorded, the state it
/// was given is handed to the next scenario unchanged, and the run goes on.
#[derive(Default)]
pub struct ScenarioRunner {
    scenarios: Vec<Box<dyn Scenario>>,
}

impl ScenarioRunner {
    /// Create a new empty runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner loaded with the full users suite
    pub fn with_default_suite(per_page: u32) -> Self {
        Self {
            scenarios: default_scenarios(per_page),
        }
    }

    /// Append a scenario after those already registered
    pub fn register<S: Scenario + 'static>(&mut self, scenario: S) {
        info!("Registering scenario: {}", scenario.name());
        self.scenarios.push(Box::new(scenario));
    }

    /// Keep only the named scenarios, preserving registration order
    pub fn retain_only(&mut self, names: &[String]) {
        self.scenarios
            .retain(|scenario| names.iter().any(|name| name == scenario.name()));
    }

    pub fn scenario_names(&self) -> Vec<&'static str> {
        self.scenarios.iter().map(|s| s.name()).collect()
    }

    pub fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        self.scenarios
            .iter()
            .map(|s| (s.name(), s.description()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Run every scenario starting from an empty state
    pub async fn run(&self, client: &UsersClient) -> RunReport {
        self.run_with_state(client, RunState::new()).await
    }

    /// Run every scenario starting from `initial`
    pub async fn run_with_state(&self, client: &UsersClient, initial: RunState) -> RunReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("contract_run", %run_id);
        self.run_scenarios(client, initial, run_id).instrument(span).await
    }

    async fn run_scenarios(&self, client: &UsersClient, initial: RunState, run_id: Uuid) -> RunReport {
        info!("Running {} scenarios against {}", self.scenarios.len(), client.users_url());

        let mut state = initial;
        let mut reports = Vec::with_capacity(self.scenarios.len());

        for scenario in &self.scenarios {
            let name = scenario.name();
            let started = Instant::now();
            let result = scenario
                .run(client, &state)
                .instrument(info_span!("scenario", name))
                .await;
            let elapsed = started.elapsed();

            let outcome = match result {
                Ok(next_state) => {
                    state = next_state;
                    info!("PASS {} ({} ms)", name, elapsed.as_millis());
                    ScenarioOutcome::Passed
                }
                Err(e) => {
                    error!("FAIL {} ({} ms): {}", name, elapsed.as_millis(), e);
                    ScenarioOutcome::Failed(e.to_string())
                }
            };

            reports.push(ScenarioReport {
                name,
                description: scenario.description(),
                outcome,
                elapsed,
            });
        }

        let report = RunReport {
            run_id,
            scenarios: reports,
            final_state: state,
        };
        info!(
            "Run finished: {} passed, {} failed",
            report.passed_count(),
            report.failed_count()
        );
        report
    }
}
