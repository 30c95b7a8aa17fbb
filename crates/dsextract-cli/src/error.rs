//! Error conversion utilities for CLI.
//!
//! Converts dsextract-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use dsextract_core::ExtractionError;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError) -> anyhow::Error {
    match err {
        ExtractionError::NotFound { path } => {
            anyhow!(
                "Archive not found: '{}'\n\
                 HINT: Place the archive there or pass --input-path <PATH>.",
                path.display()
            )
        }
        ExtractionError::InvalidArchive { path, reason } => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The file is not a ZIP archive or is corrupted. Replace it and retry.",
                path.display(),
                reason
            )
        }
        ExtractionError::Io { entry, source } => {
            anyhow!(
                "I/O error while extracting '{}': {}\n\
                 HINT: Entries before it were kept. Check permissions and free space, then rerun.",
                entry,
                source
            )
        }
    }
}

/// Maps a core result into an anyhow result with user-facing context
pub fn add_extraction_context<T>(
    result: Result<T, ExtractionError>,
) -> anyhow::Result<T> {
    result.map_err(convert_extraction_error)
}
