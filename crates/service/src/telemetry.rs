//! Tracing subscriber setup. All logs go to stdout for the container runtime.

use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{Config, LogFormat};

/// Builds the filter from the configured directive. An unparseable directive
/// yields `info` together with the parse error so the caller can report it.
pub fn env_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    }
}

/// The fmt layer for `format`, writing through `writer`.
pub fn fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Text => fmt::layer().with_writer(writer).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    }
}

/// Installs the global subscriber. Call once, from `main`.
pub fn init(config: &Config) {
    let (filter, rejected) = env_filter(&config.log_level);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config.log_format, std::io::stdout))
        .init();

    if let Some(err) = rejected {
        tracing::warn!(
            directive = %config.log_level,
            error = %err,
            "ignoring invalid RUST_LOG directive, logging at info"
        );
    }
}
