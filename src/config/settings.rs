//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::i18n::ResolutionMode;

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Module resolution and load-mode configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Resolution phase for every load request
    pub mode: ResolutionMode,
    /// Base URL prepended to module identifiers
    pub base_url: String,
    /// Module id prefix to path overrides
    pub paths: BTreeMap<String, String>,
    /// Module that `./` and `../` identifiers are relative to
    pub parent_module: Option<String>,
    /// Location relative locators are anchored to
    pub document_url: Option<String>,
}

/// Which fetcher backs the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    Http,
    File,
}

/// Resource fetch configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    pub backend: FetchBackend,
    /// Root directory for the file backend
    pub root: String,
    /// Base URL relative locators are joined onto by the HTTP backend
    pub http_base_url: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; console only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("bundle-loader").required(false))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit file, still honoring environment overrides
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BundleError> {
        super::validation::validate_settings(self)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("BUNDLE_LOADER").separator("__")
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            mode: ResolutionMode::Runtime,
            base_url: "./".to_string(),
            paths: BTreeMap::new(),
            parent_module: None,
            document_url: None,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            backend: FetchBackend::File,
            root: ".".to_string(),
            http_base_url: None,
            timeout_seconds: 10,
            user_agent: concat!("bundle-loader/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}
