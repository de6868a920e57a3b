//! Module identifier to URL resolution
//!
//! The loader only knows module identifiers; turning them into something a
//! fetcher can retrieve is delegated to a [`ModuleUrlResolver`].

use std::collections::BTreeMap;

use crate::config::LoaderConfig;

/// Converts module identifiers into fetchable locations
pub trait ModuleUrlResolver: Send + Sync {
    /// Resolve a module identifier against the requesting module.
    /// Identity by default.
    fn normalize(&self, module_id: &str) -> String {
        module_id.to_string()
    }

    /// Location of a module identifier, without any file extension
    fn to_url(&self, module_id: &str) -> String;
}

/// Path-mapping resolver in the style of an AMD loader configuration
#[derive(Debug, Clone)]
pub struct ModulePaths {
    base_url: String,
    paths: BTreeMap<String, String>,
    parent_module: Option<String>,
}

impl ModulePaths {
    /// Create a resolver rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.is_empty() && !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            base_url,
            paths: BTreeMap::new(),
            parent_module: None,
        }
    }

    /// Build a resolver from loader configuration
    pub fn from_config(config: &LoaderConfig) -> Self {
        let mut resolver = Self::new(config.base_url.clone());
        for (prefix, path) in &config.paths {
            resolver = resolver.with_path(prefix.clone(), path.clone());
        }
        if let Some(ref parent) = config.parent_module {
            resolver = resolver.with_parent(parent.clone());
        }
        resolver
    }

    /// Map every module under `prefix` to `path`
    pub fn with_path(mut self, prefix: impl Into<String>, path: impl Into<String>) -> Self {
        let prefix = prefix.into().trim_end_matches('/').to_string();
        let path = path.into().trim_end_matches('/').to_string();
        self.paths.insert(prefix, path);
        self
    }

    /// Resolve `./` and `../` identifiers relative to this module
    pub fn with_parent(mut self, parent_module: impl Into<String>) -> Self {
        self.parent_module = Some(parent_module.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Longest configured prefix owning `module_id`
    fn mapped_path(&self, module_id: &str) -> Option<String> {
        self.paths
            .iter()
            .filter(|(prefix, _)| {
                module_id == prefix.as_str()
                    || (module_id.starts_with(prefix.as_str())
                        && module_id[prefix.len()..].starts_with('/'))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, path)| format!("{}{}", path, &module_id[prefix.len()..]))
    }
}

fn is_absolute_location(location: &str) -> bool {
    location.starts_with('/') || location.contains("://")
}

impl ModuleUrlResolver for ModulePaths {
    fn normalize(&self, module_id: &str) -> String {
        let parent = match self.parent_module {
            Some(ref parent) if module_id.starts_with("./") || module_id.starts_with("../") => parent,
            _ => return module_id.to_string(),
        };

        let mut segments: Vec<&str> = parent.split('/').collect();
        segments.pop();

        for segment in module_id.split('/') {
            match segment {
                "." => {}
                ".." => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ => segments.push(".."),
                },
                other => segments.push(other),
            }
        }

        segments.join("/")
    }

    fn to_url(&self, module_id: &str) -> String {
        let module_id = self.normalize(module_id);
        if module_id.starts_with('.') || is_absolute_location(&module_id) {
            return module_id;
        }

        match self.mapped_path(&module_id) {
            Some(path) if is_absolute_location(&path) => path,
            Some(path) => format!("{}{}", self.base_url, path),
            None => format!("{}{}", self.base_url, module_id),
        }
    }
}
