use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{ScenarioError, ScenarioResult};
use crate::types::UserPayload;

/// A response captured from the users API
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Method and path that produced the response, e.g. `DELETE /users/42`
    pub request: String,
    pub status: StatusCode,
    /// JSON body; `Null` for an empty body, a JSON string for a non-JSON body
    pub body: Value,
}

impl ApiResponse {
    /// Fail unless the response carries the expected status
    pub fn expect_status(self, expected: StatusCode) -> ScenarioResult<Self> {
        if self.status == expected {
            return Ok(self);
        }
        Err(ScenarioError::UnexpectedStatus {
            request: self.request,
            expected: expected.as_u16(),
            actual: self.status.as_u16(),
            body: self.body.to_string(),
        })
    }
}

/// HTTP client for the `/users` collection.
///
/// Reads go out unauthenticated; create, update, patch and delete carry the
/// configured bearer token.
#[derive(Clone)]
pub struct UsersClient {
    http: Client,
    users_url: String,
    bearer_token: Option<String>,
}

impl UsersClient {
    /// Build a client from configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    /// Build a client around an existing reqwest client
    pub fn with_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            users_url: config.users_url(),
            bearer_token: config.api_token.clone(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// GET /users?per_page=N
    pub async fn list(&self, per_page: u32) -> ScenarioResult<ApiResponse> {
        let request = self.http.get(&self.users_url).query(&[("per_page", per_page)]);
        self.send(request, format!("GET /users?per_page={per_page}")).await
    }

    /// GET /users/{id}
    pub async fn get(&self, id: &str) -> ScenarioResult<ApiResponse> {
        let request = self.http.get(self.user_url(id));
        self.send(request, format!("GET /users/{id}")).await
    }

    /// POST /users
    pub async fn create(&self, payload: &UserPayload) -> ScenarioResult<ApiResponse> {
        let request = self.authorized(self.http.post(&self.users_url)).json(payload);
        self.send(request, "POST /users".to_string()).await
    }

    /// PUT /users/{id}
    pub async fn update(&self, id: &str, payload: &UserPayload) -> ScenarioResult<ApiResponse> {
        let request = self.authorized(self.http.put(self.user_url(id))).json(payload);
        self.send(request, format!("PUT /users/{id}")).await
    }

    /// PATCH /users/{id}
    pub async fn patch(&self, id: &str, payload: &UserPayload) -> ScenarioResult<ApiResponse> {
        let request = self.authorized(self.http.patch(self.user_url(id))).json(payload);
        self.send(request, format!("PATCH /users/{id}")).await
    }

    /// DELETE /users/{id}
    pub async fn delete(&self, id: &str) -> ScenarioResult<ApiResponse> {
        let request = self.authorized(self.http.delete(self.user_url(id)));
        self.send(request, format!("DELETE /users/{id}")).await
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/{}", self.users_url, id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, label: String) -> ScenarioResult<ApiResponse> {
        debug!("Sending {}", label);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("{} -> {} ({} bytes)", label, status, text.len());

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(ApiResponse {
            request: label,
            status,
            body,
        })
    }
}
