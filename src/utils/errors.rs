//! Error handling for the bundle loader
//!
//! This module defines the error types surfaced by normalization, loading and
//! configuration, and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for bundle loading
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Invalid bundle reference: {0}")]
    InvalidReference(String),

    #[error("Resource load error: {0}")]
    ResourceLoad(#[from] ResourceLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Failures reported by a resource fetcher
#[derive(Error, Debug)]
pub enum ResourceLoadError {
    #[error("Resource not found: {locator}")]
    NotFound { locator: String },

    #[error("Timed out fetching {locator}")]
    Timeout { locator: String },

    #[error("Request for {locator} failed: {reason}")]
    RequestFailed { locator: String, reason: String },

    #[error("Invalid resource locator {locator}: {reason}")]
    InvalidLocator { locator: String, reason: String },

    #[error("I/O error reading {locator}: {source}")]
    Io {
        locator: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for bundle operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, ResourceLoadError>;

impl ResourceLoadError {
    /// Locator of the resource that failed to load
    pub fn locator(&self) -> &str {
        match self {
            ResourceLoadError::NotFound { locator }
            | ResourceLoadError::Timeout { locator }
            | ResourceLoadError::RequestFailed { locator, .. }
            | ResourceLoadError::InvalidLocator { locator, .. }
            | ResourceLoadError::Io { locator, .. } => locator,
        }
    }
}

impl BundleError {
    /// Check if the error is recoverable
    ///
    /// The loader never retries; this only informs the host.
    pub fn is_recoverable(&self) -> bool {
        match self {
            BundleError::InvalidReference(_) => false,
            BundleError::ResourceLoad(ResourceLoadError::Timeout { .. }) => true,
            BundleError::ResourceLoad(ResourceLoadError::RequestFailed { .. }) => true,
            BundleError::ResourceLoad(ResourceLoadError::Io { .. }) => true,
            BundleError::ResourceLoad(_) => false,
            BundleError::Config(_) => false,
            BundleError::Http(_) => true,
            BundleError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BundleError::Config(_) => ErrorSeverity::Critical,
            BundleError::InvalidReference(_) => ErrorSeverity::Warning,
            BundleError::ResourceLoad(ResourceLoadError::NotFound { .. }) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_recoverable() {
        let err = BundleError::from(ResourceLoadError::NotFound {
            locator: "./i18n/messages.properties".to_string(),
        });
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(
            err.to_string(),
            "Resource load error: Resource not found: ./i18n/messages.properties"
        );
    }

    #[test]
    fn test_timeout_is_recoverable() {
        let err = BundleError::from(ResourceLoadError::Timeout {
            locator: "http://localhost/a.properties".to_string(),
        });
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_config_and_reference_errors() {
        let err = BundleError::Config("Fetch timeout must be greater than 0".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");

        let err = BundleError::InvalidReference("bundle path cannot be a single '/'".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_locator_accessor() {
        let err = ResourceLoadError::RequestFailed {
            locator: "x.properties".to_string(),
            reason: "HTTP 500".to_string(),
        };
        assert_eq!(err.locator(), "x.properties");
    }
}
