//! Request service entry point.

use std::process::ExitCode;

use request_service::{Config, server, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load configuration; logging is not up yet, so report on stderr
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("request-service: {err}");
            return ExitCode::FAILURE;
        }
    };

    // 2. Initialize tracing
    telemetry::init(&config);

    // 3. Bind and serve until SIGINT/SIGTERM
    match server::run(config).await {
        Ok(()) => {
            tracing::info!("server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "request service failed");
            ExitCode::FAILURE
        }
    }
}
