//! Liveness and readiness probes.
//!
//! Neither probe touches an external resource: the process is ready as soon
//! as it can answer HTTP, and the orchestrator restarts it when it cannot.

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health — liveness probe.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready — readiness probe.
pub async fn ready() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ready".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_reports_ok() {
        let Json(body) = check().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn test_ready_reports_ready() {
        let Json(body) = ready().await;
        assert_eq!(body.status, "ready");
    }
}
