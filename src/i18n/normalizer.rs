//! Bundle reference normalization
//!
//! Maps whatever a caller wrote after the plugin prefix to the module
//! identifier of a message bundle. Pure and total: every input lands in
//! exactly one [`BundleReferenceKind`].

use std::fmt;

use serde::Serialize;

use crate::utils::errors::{BundleError, Result};

/// Identifier used when no reference is given
pub const DEFAULT_BUNDLE_ID: &str = "./i18n/messages";

/// Folder that bare bundle names live in
pub const DEFAULT_BUNDLE_DIR: &str = "./i18n/";

/// How a raw bundle reference is to be resolved, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleReferenceKind<'a> {
    /// `""` or no reference at all
    Default,
    /// `/pentaho/common/nls/messages`; holds the text after the `/`
    Absolute(&'a str),
    /// `messages`; a bundle in the conventional local folder
    Named(&'a str),
    /// `./nls/information`, or an id the host already resolved
    Relative(&'a str),
}

/// Module identifier of a message bundle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalIdentifier(String);

impl CanonicalIdentifier {
    /// Wrap an identifier a module resolver has already normalized
    pub(crate) fn from_resolved(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the identifier is still relative to the requesting module
    pub fn is_relative(&self) -> bool {
        self.0.starts_with('.')
    }
}

impl fmt::Display for CanonicalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CanonicalIdentifier> for String {
    fn from(id: CanonicalIdentifier) -> Self {
        id.0
    }
}

/// Classify a raw reference
pub fn classify(reference: Option<&str>) -> BundleReferenceKind<'_> {
    match reference {
        None | Some("") => BundleReferenceKind::Default,
        Some(r) if r.starts_with('/') => BundleReferenceKind::Absolute(&r[1..]),
        Some(r) if !r.starts_with('.') && !r.contains('/') => BundleReferenceKind::Named(r),
        Some(r) => BundleReferenceKind::Relative(r),
    }
}

/// Normalize a raw reference into a canonical bundle identifier
pub fn normalize(reference: Option<&str>) -> Result<CanonicalIdentifier> {
    let id = match classify(reference) {
        BundleReferenceKind::Default => DEFAULT_BUNDLE_ID.to_string(),
        BundleReferenceKind::Absolute("") => {
            return Err(BundleError::InvalidReference(
                "bundle path cannot be a single '/'".to_string(),
            ));
        }
        BundleReferenceKind::Absolute(mid) => mid.to_string(),
        BundleReferenceKind::Named(name) => format!("{}{}", DEFAULT_BUNDLE_DIR, name),
        BundleReferenceKind::Relative(mid) => mid.to_string(),
    };

    Ok(CanonicalIdentifier(id))
}
