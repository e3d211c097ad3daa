//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter. Production logs are JSON,
//! everything else is compact human-readable output.

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn for_production(is_production: bool) -> Self {
        if is_production {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Builds the filter, preferring `RUST_LOG` over `default_directives`.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(default_directives: &str, format: LogFormat) -> Result<(), TryInitError> {
    let filter = env_filter(default_directives);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .json()
                    .with_current_span(true),
            )
            .try_init(),
    }
}
