//! Message bundle loading
//!
//! Ties the pieces together: normalize the reference, turn it into a
//! `.properties` locator, fetch the text and parse it into a
//! [`MessageBundle`]. Every call is independent and nothing is cached.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::fetcher::ResourceFetcher;
use crate::services::resolver::ModuleUrlResolver;
use crate::utils::errors::{BundleError, Result};
use crate::utils::logging;
use super::bundle::MessageBundle;
use super::normalizer::{self, CanonicalIdentifier};

/// Suffix appended to a module URL to locate its bundle file
pub const BUNDLE_EXTENSION: &str = ".properties";

/// Phase a load request is issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Fetch and parse now
    #[default]
    Runtime,
    /// Optimizer pass: do not fetch, the runtime resolves it later
    Build,
}

/// Per-call load configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadConfig {
    pub mode: ResolutionMode,
}

impl LoadConfig {
    pub fn runtime() -> Self {
        Self { mode: ResolutionMode::Runtime }
    }

    pub fn build() -> Self {
        Self { mode: ResolutionMode::Build }
    }

    /// Map a host's `isBuild` flag
    pub fn from_is_build(is_build: bool) -> Self {
        if is_build {
            Self::build()
        } else {
            Self::runtime()
        }
    }

    pub fn is_build(&self) -> bool {
        self.mode == ResolutionMode::Build
    }
}

/// Result of a successful load call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(MessageBundle),
    /// Build mode: completed without a bundle
    Deferred,
}

impl LoadOutcome {
    pub fn is_deferred(&self) -> bool {
        matches!(self, LoadOutcome::Deferred)
    }

    pub fn bundle(&self) -> Option<&MessageBundle> {
        match self {
            LoadOutcome::Loaded(bundle) => Some(bundle),
            LoadOutcome::Deferred => None,
        }
    }

    pub fn into_bundle(self) -> Option<MessageBundle> {
        match self {
            LoadOutcome::Loaded(bundle) => Some(bundle),
            LoadOutcome::Deferred => None,
        }
    }
}

/// Loads message bundles through a module URL resolver
#[derive(Debug, Clone)]
pub struct BundleLoader<R> {
    resolver: R,
    document_base: Option<String>,
}

impl<R: ModuleUrlResolver> BundleLoader<R> {
    /// Create a new loader
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            document_base: None,
        }
    }

    /// Location that still-relative locators are anchored to
    pub fn with_document_base(mut self, document_base: impl Into<String>) -> Self {
        self.document_base = Some(document_base.into());
        self
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Identifier a host should key duplicate requests on
    pub fn normalize_for_cache(&self, reference: Option<&str>) -> Result<CanonicalIdentifier> {
        let id = normalizer::normalize(reference)?;
        Ok(CanonicalIdentifier::from_resolved(self.resolver.normalize(id.as_str())))
    }

    /// Locator of the bundle file for an identifier
    pub fn locator_for(&self, id: &CanonicalIdentifier) -> String {
        let locator = format!("{}{}", self.resolver.to_url(id.as_str()), BUNDLE_EXTENSION);

        match self.document_base {
            Some(ref base) if locator.starts_with('.') => anchor_to_base(base, &locator),
            _ => locator,
        }
    }

    /// Load the bundle a reference points at
    ///
    /// In build mode this returns [`LoadOutcome::Deferred`] without fetching.
    pub async fn load<F>(
        &self,
        reference: Option<&str>,
        fetcher: &F,
        config: &LoadConfig,
    ) -> Result<LoadOutcome>
    where
        F: ResourceFetcher + ?Sized,
    {
        let id = normalizer::normalize(reference)?;

        if config.is_build() {
            logging::log_load_deferred(id.as_str());
            return Ok(LoadOutcome::Deferred);
        }

        let locator = self.locator_for(&id);
        debug!(identifier = %id, locator = %locator, "Loading message bundle");

        let text = match fetcher.fetch(&locator).await {
            Ok(text) => text,
            Err(e) => {
                logging::log_fetch_failure(id.as_str(), &locator, &e.to_string());
                return Err(BundleError::ResourceLoad(e));
            }
        };

        let bundle = MessageBundle::from_properties(&text);
        logging::log_bundle_loaded(id.as_str(), &locator, bundle.len());

        Ok(LoadOutcome::Loaded(bundle))
    }
}

/// Prefix `locator` with everything in `base` up to and including its last `/`
pub fn anchor_to_base(base: &str, locator: &str) -> String {
    match base.rfind('/') {
        Some(index) => format!("{}{}", &base[..=index], locator),
        None => locator.to_string(),
    }
}
