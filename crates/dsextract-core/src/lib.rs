//! Dataset archive extraction with pre-flight validation.
//!
//! `dsextract-core` unpacks a ZIP archive from an external data location
//! into a raw dataset directory. The source is checked for existence and
//! ZIP structure before anything is written, entries are extracted in
//! archive order, and progress is reported once per entry through a
//! [`ProgressCallback`].
//!
//! # Examples
//!
//! ```no_run
//! use dsextract_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract_archive("data/external/dataset.zip", "data/raw")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod path;
pub mod report;
#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract;
pub use api::extract_archive;
pub use api::extract_archive_with_progress;
pub use api::list_entries;
pub use archive::DatasetArchive;
pub use config::ExtractConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
