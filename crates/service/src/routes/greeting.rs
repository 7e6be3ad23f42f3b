//! Greeting endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ApiError;

/// Longest name accepted by `/hello/{name}`.
pub const MAX_NAME_LEN: usize = 64;

/// Immutable per-process state shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service_name: String,
    pub version: &'static str,
}

impl AppState {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.service_name.clone())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: String,
    pub service: String,
    pub version: String,
}

impl GreetingResponse {
    fn new(state: &AppState, message: String) -> Self {
        Self {
            message,
            service: state.service_name.clone(),
            version: state.version.to_string(),
        }
    }
}

/// GET / — fixed greeting identifying the service. Also the probe target.
#[tracing::instrument(skip(state))]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<GreetingResponse> {
    metrics::counter!("greetings_served_total", "route" => "root").increment(1);

    let message = format!("Hello from {}!", state.service_name);
    Json(GreetingResponse::new(&state, message))
}

/// GET /hello/{name} — personalised greeting.
///
/// Undecodable path segments are reported through [`ApiError`] like any
/// other malformed name.
#[tracing::instrument(skip(state, path))]
pub async fn hello(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let Path(name) = path?;
    validate_name(&name)?;
    metrics::counter!("greetings_served_total", "route" => "hello").increment(1);

    let message = format!("Hello, {name}!");
    Ok(Json(GreetingResponse::new(&state, message)))
}

/// Names are 1..=64 ASCII alphanumerics, `-` or `_`.
pub fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ApiError::BadRequest(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ApiError::BadRequest(format!(
            "name contains invalid character {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new("greeter"))
    }

    #[tokio::test]
    async fn test_root_greets_with_service_name() {
        let Json(body) = root(State(state())).await;
        assert_eq!(body.message, "Hello from greeter!");
        assert_eq!(body.service, "greeter");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_hello_uses_path_name() {
        let Json(body) = hello(State(state()), Ok(Path("ada".to_string())))
            .await
            .unwrap();
        assert_eq!(body.message, "Hello, ada!");
    }

    #[tokio::test]
    async fn test_hello_rejects_invalid_name() {
        let result = hello(State(state()), Ok(Path("a b".to_string()))).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_validate_name_accepts_allowed_characters() {
        assert!(validate_name("node-1_A").is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert!(matches!(validate_name(""), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_validate_name_rejects_too_long() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(validate_name(&name), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_validate_name_rejects_punctuation() {
        for name in ["a.b", "a/b", "émile", "<script>"] {
            assert!(
                matches!(validate_name(name), Err(ApiError::BadRequest(_))),
                "{name} should be rejected"
            );
        }
    }
}
