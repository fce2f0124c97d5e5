// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields every user record returned by the API must carry
pub const USER_FIELDS: [&str; 5] = ["id", "name", "email", "gender", "status"];

/// Fields the API requires when creating a user
pub const CREATE_USER_FIELDS: [&str; 4] = ["name", "email", "gender", "status"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A user record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub status: UserStatus,
}

/// Body for create, full update and partial update requests.
/// Unset fields are left out of the JSON entirely, so the default value
/// serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserPayload {
    /// An empty payload
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Submitted fields paired with the JSON value the API should echo back
    pub fn submitted_fields(&self) -> Vec<(&'static str, Value)> {
        let mut fields = Vec::new();
        if let Some(name) = &self.name {
            fields.push(("name", Value::String(name.clone())));
        }
        if let Some(email) = &self.email {
            fields.push(("email", Value::String(email.clone())));
        }
        if let Some(gender) = self.gender {
            fields.push(("gender", serde_json::to_value(gender).unwrap_or(Value::Null)));
        }
        if let Some(status) = self.status {
            fields.push(("status", serde_json::to_value(status).unwrap_or(Value::Null)));
        }
        fields
    }

    /// Names of the fields this payload leaves out
    pub fn omitted_fields(&self) -> Vec<&'static str> {
        let submitted: Vec<&str> = self.submitted_fields().into_iter().map(|(f, _)| f).collect();
        CREATE_USER_FIELDS
            .into_iter()
            .filter(|field| !submitted.contains(field))
            .collect()
    }
}

/// One entry of a 422 response body
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    #[serde(default)]
    pub message: String,
}

/// Email address that will not collide with earlier runs
pub fn unique_email() -> String {
    format!("{}email@email.com", chrono::Utc::now().timestamp_millis())
}

/// State carried from one scenario to the next.
///
/// The user id is captured by the listing scenario and read by every
/// scenario that targets a single user. It is never reset during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    current_user_id: Option<u64>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with a user id already captured, for running a scenario on its own
    pub fn with_user_id(id: u64) -> Self {
        Self {
            current_user_id: Some(id),
        }
    }

    pub fn current_user_id(&self) -> Option<u64> {
        self.current_user_id
    }

    /// Returns the state with `id` captured as the current user
    pub fn capture_user_id(self, id: u64) -> Self {
        Self {
            current_user_id: Some(id),
        }
    }

    /// Path segment addressing the current user.
    /// An unset id renders as `0`, which the API answers with 404.
    pub fn user_path_segment(&self) -> String {
        self.current_user_id.unwrap_or(0).to_string()
    }
}
