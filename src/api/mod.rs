//! Client for the external users/data HTTP service.

mod client;
mod types;

pub use client::{ApiClient, ApiError, DEFAULT_BASE_URL};
pub use types::{DataSummary, NewUser, User};
