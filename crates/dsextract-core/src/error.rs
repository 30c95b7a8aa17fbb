//! Error types for dataset extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while extracting a dataset archive.
///
/// Every variant is logged once where it is detected and then returned to
/// the caller unchanged.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Source archive does not exist.
    #[error("file {} not found", path.display())]
    NotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source exists but is not a structurally valid ZIP container.
    #[error("{} is not a valid ZIP archive: {reason}", path.display())]
    InvalidArchive {
        /// The source path that failed to parse.
        path: PathBuf,
        /// Reason reported by the ZIP reader.
        reason: String,
    },

    /// A single entry failed to extract after the archive was opened.
    #[error("failed to extract entry '{entry}': {source}")]
    Io {
        /// Name of the failing entry as stored in the archive.
        entry: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    /// Returns `true` if retrying the same call may succeed without
    /// replacing the input.
    ///
    /// Only entry I/O failures qualify (disk full, permissions). Missing or
    /// malformed archives need operator intervention first.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsextract_core::ExtractionError;
    /// use std::path::PathBuf;
    ///
    /// let err = ExtractionError::NotFound {
    ///     path: PathBuf::from("data/external/dataset.zip"),
    /// };
    /// assert!(!err.is_retryable());
    /// ```
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns the name of the entry that failed, if the error is tied to one.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::Io { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
