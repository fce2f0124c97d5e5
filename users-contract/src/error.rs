use serde_json::Value;
use thiserror::Error;

/// Error type for a single contract scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{request}: expected status {expected}, got {actual} with body {body}")]
    UnexpectedStatus {
        request: String,
        expected: u16,
        actual: u16,
        body: String,
    },
    #[error("Unexpected body shape: expected {expected}, got {actual}")]
    UnexpectedShape {
        expected: &'static str,
        actual: String,
    },
    #[error("Expected {expected} records, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },
    #[error("Record is missing field '{0}'")]
    MissingField(String),
    #[error("Field '{field}' mismatch: expected {expected}, got {actual}")]
    FieldMismatch {
        field: String,
        expected: Value,
        actual: Value,
    },
    #[error("No validation error reported for field '{0}'")]
    MissingValidationError(String),
}

/// Alias for Result using ScenarioError
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Error type for loading configuration from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}
