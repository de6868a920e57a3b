//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the bundle loader. The library only emits events; installing a
//! subscriber is left to the host binary.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{BundleError, Result};

/// Initialize logging based on configuration
///
/// The returned guard must be held for as long as file output is wanted.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| BundleError::Config(format!("Invalid log filter: {}", e)))?;

    let console_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "bundle-loader.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| BundleError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a successfully loaded bundle
pub fn log_bundle_loaded(identifier: &str, locator: &str, entries: usize) {
    debug!(
        identifier = identifier,
        locator = locator,
        entries = entries,
        "Message bundle loaded"
    );
}

/// Log a load deferred to the runtime phase
pub fn log_load_deferred(identifier: &str) {
    debug!(
        identifier = identifier,
        "Build mode: bundle resolution deferred to runtime"
    );
}

/// Log a failed fetch with context
pub fn log_fetch_failure(identifier: &str, locator: &str, error: &str) {
    warn!(
        identifier = identifier,
        locator = locator,
        error = error,
        "Failed to fetch message bundle"
    );
}
