// Public modules for integration tests and library usage
pub mod assertions;
pub mod client;
pub mod config;
pub mod error;
pub mod runner;
pub mod scenarios;
pub mod types;

// Re-export commonly used types for convenience
pub use client::{ApiResponse, UsersClient};
pub use config::Config;
pub use error::{ConfigError, ScenarioError, ScenarioResult};
pub use runner::{RunReport, ScenarioOutcome, ScenarioReport, ScenarioRunner};
pub use scenarios::{Scenario, default_scenarios};
pub use types::{Gender, RunState, User, UserPayload, UserStatus, ValidationError};
