//! Resource fetchers
//!
//! A fetcher turns a fully resolved locator into raw bundle text. Timeouts
//! and cancellation are a fetcher concern; the loader simply awaits.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt};
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::config::FetchConfig;
use crate::utils::errors::{BundleError, FetchResult, ResourceLoadError, Result};

/// Retrieves the text behind a resource locator
pub trait ResourceFetcher: Send + Sync {
    fn fetch<'a>(&'a self, locator: &'a str) -> BoxFuture<'a, FetchResult<String>>;
}

/// Fetches bundles over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Option<Url>,
}

impl HttpFetcher {
    /// Create a new HttpFetcher instance
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(BundleError::Http)?;

        let base_url = match config.http_base_url {
            Some(ref base) => Some(Url::parse(base)?),
            None => None,
        };

        Ok(Self { client, base_url })
    }

    /// Join relative locators onto this base URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    fn resolve(&self, locator: &str) -> FetchResult<Url> {
        let invalid = |reason: String| ResourceLoadError::InvalidLocator {
            locator: locator.to_string(),
            reason,
        };

        match Url::parse(locator) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match self.base_url {
                Some(ref base) => base.join(locator).map_err(|e| invalid(e.to_string())),
                None => Err(invalid("relative locator and no base URL configured".to_string())),
            },
            Err(e) => Err(invalid(e.to_string())),
        }
    }

    async fn get(&self, locator: &str) -> FetchResult<String> {
        let url = self.resolve(locator)?;

        debug!(locator = locator, url = %url, "Fetching bundle over HTTP");

        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResourceLoadError::Timeout { locator: locator.to_string() }
                } else {
                    ResourceLoadError::RequestFailed {
                        locator: locator.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ResourceLoadError::NotFound { locator: locator.to_string() });
        }
        if !status.is_success() {
            return Err(ResourceLoadError::RequestFailed {
                locator: locator.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        response.text().await.map_err(|e| ResourceLoadError::RequestFailed {
            locator: locator.to_string(),
            reason: e.to_string(),
        })
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch<'a>(&'a self, locator: &'a str) -> BoxFuture<'a, FetchResult<String>> {
        self.get(locator).boxed()
    }
}

/// Reads bundles from a directory tree
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a locator onto a path under the root; `file://` URLs are taken as is
    fn path_for(&self, locator: &str) -> FetchResult<PathBuf> {
        if locator.starts_with("file://") {
            let url = Url::parse(locator).map_err(|e| ResourceLoadError::InvalidLocator {
                locator: locator.to_string(),
                reason: e.to_string(),
            })?;
            return url.to_file_path().map_err(|_| ResourceLoadError::InvalidLocator {
                locator: locator.to_string(),
                reason: "not a local file URL".to_string(),
            });
        }

        if locator.contains("://") {
            return Err(ResourceLoadError::InvalidLocator {
                locator: locator.to_string(),
                reason: "unsupported scheme for file fetcher".to_string(),
            });
        }

        let relative = Path::new(locator.trim_start_matches('/'));
        let mut depth = 0usize;
        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(_) => depth += 1,
                Component::ParentDir if depth > 0 => depth -= 1,
                Component::ParentDir => {
                    return Err(ResourceLoadError::InvalidLocator {
                        locator: locator.to_string(),
                        reason: "path escapes the fetcher root".to_string(),
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(ResourceLoadError::InvalidLocator {
                        locator: locator.to_string(),
                        reason: "absolute path inside locator".to_string(),
                    });
                }
            }
        }

        Ok(self.root.join(relative))
    }

    async fn read(&self, locator: &str) -> FetchResult<String> {
        let path = self.path_for(locator)?;

        debug!(locator = locator, path = %path.display(), "Reading bundle file");

        tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ResourceLoadError::NotFound { locator: locator.to_string() },
            _ => ResourceLoadError::Io { locator: locator.to_string(), source: e },
        })
    }
}

impl ResourceFetcher for FileFetcher {
    fn fetch<'a>(&'a self, locator: &'a str) -> BoxFuture<'a, FetchResult<String>> {
        self.read(locator).boxed()
    }
}

/// Serves bundles from memory and counts requests
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, locator: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(locator, text);
        self
    }

    pub fn insert(&mut self, locator: impl Into<String>, text: impl Into<String>) {
        self.resources.insert(locator.into(), text.into());
    }

    /// Number of fetches attempted so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ResourceFetcher for MemoryFetcher {
    fn fetch<'a>(&'a self, locator: &'a str) -> BoxFuture<'a, FetchResult<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .resources
            .get(locator)
            .cloned()
            .ok_or_else(|| ResourceLoadError::NotFound { locator: locator.to_string() });
        future::ready(result).boxed()
    }
}
