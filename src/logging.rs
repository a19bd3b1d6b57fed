//! # Structured Logging
//!
//! Environment-aware tracing initialization. Safe to call more than once;
//! only the first call installs the global subscriber.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific defaults.
///
/// `RUST_LOG` wins when set; otherwise the level is derived from the
/// deployment environment (`FRED_ENV` / `APP_ENV`).
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(filter),
        );

        // Another subscriber may already be installed by the host application
        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        } else {
            tracing::info!(environment = %environment, "structured logging initialized");
        }
    });
}

fn get_environment() -> String {
    std::env::var("FRED_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}
