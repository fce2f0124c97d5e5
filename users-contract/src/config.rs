use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Public endpoint the suite targets unless overridden
pub const DEFAULT_API_URL: &str = "https://gorest.co.in/public/v2";
/// Page size requested by the listing scenario
pub const DEFAULT_PER_PAGE: u32 = 2;

pub const API_TOKEN_ENV: &str = "apiToken";
pub const API_URL_ENV: &str = "USERS_API_URL";
pub const PER_PAGE_ENV: &str = "USERS_PER_PAGE";
pub const TIMEOUT_ENV: &str = "USERS_TIMEOUT_SECS";
pub const DEBUG_ENV: &str = "USERS_DEBUG";

/// Configuration for a contract run
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the API, without the `/users` collection
    pub api_url: String,

    /// Bearer token attached to every mutating request.
    /// Not validated locally; a missing token surfaces as remote 401s.
    pub api_token: Option<String>,

    /// Page size for the listing scenario
    pub per_page: u32,

    /// Per-request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,

    /// Whether to enable debug logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            per_page: DEFAULT_PER_PAGE,
            timeout: None,
            debug: false,
        }
    }
}

// Hand-written so the token never reaches a log line
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("per_page", &self.per_page)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

impl Config {
    /// Create a new Config by reading environment variables, falling back to
    /// defaults for anything unset or blank
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = read_env_nonempty(API_URL_ENV) {
            config.api_url = url;
        }

        config.api_token = read_env_nonempty(API_TOKEN_ENV);

        if let Some(raw) = read_env_nonempty(PER_PAGE_ENV) {
            config.per_page = parse_positive(PER_PAGE_ENV, &raw)? as u32;
        }

        if let Some(raw) = read_env_nonempty(TIMEOUT_ENV) {
            config.timeout = Some(Duration::from_secs(parse_positive(TIMEOUT_ENV, &raw)?));
        }

        if let Some(raw) = read_env_nonempty(DEBUG_ENV) {
            config.debug = raw.to_lowercase() == "true" || raw == "1";
        }

        Ok(config)
    }

    /// URL of the users collection
    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_url.trim_end_matches('/'))
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.debug
    }

    /// Log the effective configuration once logging is set up
    pub fn log_summary(&self) {
        info!("Users API endpoint: {}", self.users_url());
        info!("Listing page size: {}", self.per_page);
        match self.timeout {
            Some(timeout) => info!("Request timeout: {}s", timeout.as_secs()),
            None => info!("Request timeout: client default"),
        }
        if self.api_token.is_some() {
            info!("API token configured: from env");
        } else {
            warn!(
                "{} not set, mutating requests will be sent without authorization",
                API_TOKEN_ENV
            );
        }
    }
}

fn read_env_nonempty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let invalid = || ConfigError::InvalidNumber {
        name,
        value: raw.to_string(),
    };
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(value) if name == PER_PAGE_ENV && value > u64::from(u32::MAX) => Err(invalid()),
        Ok(value) => Ok(value),
    }
}
