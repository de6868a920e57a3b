//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{BundleError, Result};
use super::{FetchBackend, Settings};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_loader_config(&settings.loader)?;
    validate_fetch_config(&settings.fetch)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate loader configuration
fn validate_loader_config(config: &super::LoaderConfig) -> Result<()> {
    if let Some(ref document_url) = config.document_url {
        if document_url.is_empty() {
            return Err(BundleError::Config(
                "Document URL cannot be empty when set".to_string()
            ));
        }
    }

    if config.paths.keys().any(|prefix| prefix.is_empty()) {
        return Err(BundleError::Config(
            "Path overrides cannot use an empty module prefix".to_string()
        ));
    }

    Ok(())
}

/// Validate fetch configuration
fn validate_fetch_config(config: &super::FetchConfig) -> Result<()> {
    if config.timeout_seconds == 0 {
        return Err(BundleError::Config(
            "Fetch timeout must be greater than 0".to_string()
        ));
    }

    match config.backend {
        FetchBackend::File => {
            if config.root.is_empty() {
                return Err(BundleError::Config(
                    "File root is required for the file backend".to_string()
                ));
            }
        }
        FetchBackend::Http => {
            if let Some(ref base) = config.http_base_url {
                Url::parse(base)?;
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BundleError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BundleError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
