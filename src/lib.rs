//! Message bundle loader
//!
//! Resolves symbolic bundle references (as written after a module loader's
//! `i18n!` plugin prefix) into parsed `.properties` message bundles.
//! Reference normalization and parsing are pure; fetching and module URL
//! resolution are supplied by the host.

pub mod config;
pub mod i18n;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BundleError, ResourceLoadError, Result};

// Re-export main components for easy access
pub use i18n::{BundleLoader, CanonicalIdentifier, LoadConfig, LoadOutcome, MessageBundle, ResolutionMode};
pub use services::{ModulePaths, ModuleUrlResolver, ResourceFetcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
