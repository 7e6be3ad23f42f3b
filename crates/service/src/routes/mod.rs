//! HTTP route handlers.

pub mod greeting;
pub mod health;
pub mod metrics;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for any path outside the route table.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
