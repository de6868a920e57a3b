//! Internationalization module
//!
//! This module resolves bundle references, parses `.properties` text and
//! loads message bundles through pluggable resolvers and fetchers.

pub mod bundle;
pub mod loader;
pub mod normalizer;
pub mod properties;

// Re-export commonly used i18n components
pub use bundle::MessageBundle;
pub use loader::{BundleLoader, LoadConfig, LoadOutcome, ResolutionMode, BUNDLE_EXTENSION};
pub use normalizer::{normalize, BundleReferenceKind, CanonicalIdentifier, DEFAULT_BUNDLE_DIR, DEFAULT_BUNDLE_ID};
