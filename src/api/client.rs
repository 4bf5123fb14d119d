//! ApiClient - talks to the users/data HTTP service.

use std::time::Duration;

use super::types::{DataSummary, ErrorBody, NewUser, User};

/// Default base URL of the users/data service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default timeout for HTTP requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback message when adding a user fails without an error body.
const ADD_USER_FAILED: &str = "Failed to add user";

/// Errors that can occur when talking to the service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Status {
        /// Response status code
        status: u16,
        /// Server-provided or fallback message
        message: String,
    },

    #[error("Invalid user: {0}")]
    InvalidUser(String),
}

/// Client for `/api/users` and `/api/data`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slashes are ignored).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch all registered users.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        log::info!("Loading users...");
        let response = self.http_client.get(self.url("/api/users")).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Failed to load users: HTTP {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        let users: Vec<User> = response.json().await?;
        log::info!("Received {} users", users.len());
        Ok(users)
    }

    /// Register a new user and return the stored record.
    pub async fn add_user(&self, user: &NewUser) -> Result<User, ApiError> {
        user.validate()?;
        log::info!("Submitting user: {}", user.name);

        let response = self
            .http_client
            .post(self.url("/api/users"))
            .json(user)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| ADD_USER_FAILED.to_string());
            log::error!("Error adding user: {}", message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let created: User = response.json().await?;
        log::info!("User added: {}", created.email);
        Ok(created)
    }

    /// Fetch the demo data summary.
    pub async fn fetch_data(&self) -> Result<DataSummary, ApiError> {
        let response = self.http_client.get(self.url("/api/data")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}
