//! Services module
//!
//! External collaborators of the loader: module URL resolution and
//! resource fetching.

pub mod fetcher;
pub mod resolver;

// Re-export commonly used services
pub use fetcher::{ResourceFetcher, HttpFetcher, FileFetcher, MemoryFetcher};
pub use resolver::{ModuleUrlResolver, ModulePaths};

use crate::config::{FetchBackend, FetchConfig, Settings};
use crate::i18n::BundleLoader;
use crate::utils::errors::Result;

/// Build the fetcher selected by configuration
pub fn create_fetcher(config: &FetchConfig) -> Result<Box<dyn ResourceFetcher>> {
    let fetcher: Box<dyn ResourceFetcher> = match config.backend {
        FetchBackend::Http => Box::new(HttpFetcher::new(config)?),
        FetchBackend::File => Box::new(FileFetcher::new(&config.root)),
    };
    Ok(fetcher)
}

/// Build a loader from configuration
pub fn create_loader(settings: &Settings) -> BundleLoader<ModulePaths> {
    let loader = BundleLoader::new(ModulePaths::from_config(&settings.loader));
    match settings.loader.document_url {
        Some(ref document_url) => loader.with_document_base(document_url.clone()),
        None => loader,
    }
}
