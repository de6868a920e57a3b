//! Simple test infrastructure for basic testing
//!
//! This provides a minimal test setup backed by a temporary directory

use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("bundle_loader=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Simple test context with a scratch directory for bundle files
pub struct SimpleTestContext {
    pub temp_dir: tempfile::TempDir,
}

impl SimpleTestContext {
    /// Create a new simple test context
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Get temp directory path
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a bundle file below the temp directory, creating parent folders
    pub fn write_bundle(&self, relative: &str, text: &str) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, text)?;
        Ok(path)
    }
}
