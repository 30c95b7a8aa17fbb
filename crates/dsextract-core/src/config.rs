//! Extraction configuration.

use std::path::Path;
use std::path::PathBuf;

/// Paths for a single extraction run.
///
/// The caller decides both values. The extractor never falls back to
/// process-wide defaults.
///
/// # Examples
///
/// ```
/// use dsextract_core::ExtractConfig;
///
/// let config = ExtractConfig::new("data/external/dataset.zip", "data/raw");
/// assert!(config.source_path().ends_with("dataset.zip"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Path of the ZIP archive to extract.
    pub source_path: PathBuf,

    /// Directory root that receives the extracted entries.
    pub destination_path: PathBuf,
}

impl ExtractConfig {
    /// Creates a configuration from a source archive and destination root.
    #[must_use]
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, destination_path: Q) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            destination_path: destination_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the source archive path.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Returns the destination directory.
    #[must_use]
    pub fn destination_path(&self) -> &Path {
        &self.destination_path
    }

    /// Replaces the source archive path.
    #[must_use]
    pub fn with_source_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_path = path.as_ref().to_path_buf();
        self
    }

    /// Replaces the destination directory.
    #[must_use]
    pub fn with_destination_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.destination_path = path.as_ref().to_path_buf();
        self
    }
}
