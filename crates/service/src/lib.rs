//! Stateless HTTP request service.
//!
//! Serves a fixed route table (greeting, liveness/readiness probes and
//! Prometheus metrics) with structured logging (tracing). Every handler is a
//! pure function of the request and the immutable [`AppState`], so any number
//! of replicas can serve traffic interchangeably.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::{ApiError, ConfigError, ServerError};
pub use routes::greeting::AppState;

/// Creates the application router: route table, metrics endpoint and middleware.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    with_middleware(router(state).merge(metrics_router))
}

/// The business and probe routes, resolved once when the router is built.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::greeting::root))
        .route("/hello/{name}", get(routes::greeting::hello))
        .route("/health", get(routes::health::check))
        .route("/ready", get(routes::health::ready))
        .with_state(state)
}

/// Wraps a router with the 404 fallback, panic isolation, CORS and request tracing.
pub fn with_middleware(router: Router) -> Router {
    router
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
