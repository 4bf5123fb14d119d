//! Wire types for the users/data service.

use serde::{Deserialize, Serialize};

use super::client::ApiError;

/// A registered user as returned by `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Registration timestamp as sent by the server.
    #[serde(rename = "registrationDate", default)]
    pub registration_date: Option<String>,
}

/// Request body for `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl NewUser {
    pub fn new(name: &str, email: &str, age: Option<u32>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            age,
        }
    }

    /// Reject users with an empty name or email.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::InvalidUser("name is required".to_string()));
        }
        if self.email.is_empty() {
            return Err(ApiError::InvalidUser("email is required".to_string()));
        }
        Ok(())
    }
}

/// Response of `GET /api/data`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataSummary {
    pub message: String,
    #[serde(default)]
    pub users: Vec<String>,
    pub status: String,
}

/// Error body the service sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}
