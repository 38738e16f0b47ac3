// Configuration types and input checks

use std::path::PathBuf;
use crate::common::error::{Error, Result};

/// How outcomes are written to the output sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `name: OK` style lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub manifest_path: PathBuf,
    pub base_dir: PathBuf,
    pub format: OutputFormat,
}

impl CheckConfig {
    pub fn new(manifest_path: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            base_dir: base_dir.into(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Check that both inputs are present on disk before any entry is read
    ///
    /// # Returns
    /// * `Ok(())` - If the manifest file and base directory exist
    /// * `Err(Error::Config)` - With the reason the inputs were rejected
    pub fn validate(&self) -> Result<()> {
        if self.manifest_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(Error::Config("First argument was empty.".to_string()));
        }

        if self.base_dir.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(Error::Config("Second argument was empty.".to_string()));
        }

        if !self.manifest_path.is_file() {
            return Err(Error::Config("Specs file does not exist.".to_string()));
        }

        if !self.base_dir.is_dir() {
            return Err(Error::Config(
                "Provided directory with files for validation does not exist.".to_string(),
            ));
        }

        Ok(())
    }
}
