//! High-level public API for dataset extraction.

use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::error;
use tracing::info;

use crate::DatasetArchive;
use crate::ExtractConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::archive::ExtractedEntry;

/// Extracts every entry of the configured archive into its destination.
///
/// The source is validated before anything is written: a missing file or
/// a malformed ZIP leaves the destination untouched. Entries are then
/// extracted one by one in central directory order, and `progress` is
/// advanced once per entry. The first failing entry aborts the run;
/// entries already written stay on disk.
///
/// # Errors
///
/// - `ExtractionError::NotFound` if the source does not exist
/// - `ExtractionError::InvalidArchive` if the source is not a valid ZIP
/// - `ExtractionError::Io` naming the first entry that failed to extract
///
/// # Examples
///
/// ```no_run
/// use dsextract_core::ExtractConfig;
/// use dsextract_core::NoopProgress;
/// use dsextract_core::extract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractConfig::new("data/external/dataset.zip", "data/raw");
/// let report = extract(&config, &mut NoopProgress)?;
/// println!("Extracted {} entries", report.entries_total);
/// # Ok(())
/// # }
/// ```
pub fn extract(
    config: &ExtractConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let source = config.source_path();
    let destination = config.destination_path();
    let start = Instant::now();

    info!(
        "Processing dataset - extracting {} to {}...",
        source.display(),
        destination.display()
    );

    let mut archive = DatasetArchive::open(source)?;
    let entries = archive.entries().to_vec();
    let total = archive.len();

    info!("Found {total} files to extract.");
    if archive.is_empty() {
        debug!("{} has no entries, nothing to write", source.display());
    }
    progress.on_start(total);

    let mut report = ExtractionReport::new();
    report.entries_total = total;

    for (index, name) in entries.iter().enumerate() {
        let outcome = archive
            .extract_entry(index, destination)
            .map_err(|source| {
                error!("Failed to extract {name} from {}: {source}", archive.path().display());
                ExtractionError::Io {
                    entry: name.clone(),
                    source,
                }
            })?;

        match outcome {
            ExtractedEntry::Directory => report.directories_created += 1,
            ExtractedEntry::File { bytes } => {
                report.files_extracted += 1;
                report.bytes_written += bytes;
            }
        }

        debug!(entry = %name, index = index + 1, total, "entry extracted");
        progress.on_entry_done(index + 1, total, name);
    }

    debug_assert_eq!(report.total_items(), report.entries_total);
    report.duration = start.elapsed();
    progress.on_complete();
    info!("Extraction of {} completed successfully.", source.display());

    Ok(report)
}

/// Extracts `archive_path` into `output_dir` without progress reporting.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
) -> Result<ExtractionReport> {
    extract_archive_with_progress(archive_path, output_dir, &mut NoopProgress)
}

/// Extracts `archive_path` into `output_dir`, reporting each entry to
/// `progress`.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let config = ExtractConfig::new(archive_path, output_dir);
    extract(&config, progress)
}

/// Lists entry names of an archive without extracting anything.
///
/// Runs the same existence and structure checks as [`extract`].
///
/// # Errors
///
/// - `ExtractionError::NotFound` if the source does not exist
/// - `ExtractionError::InvalidArchive` if the source is not a valid ZIP
pub fn list_entries<P: AsRef<Path>>(archive_path: P) -> Result<Vec<String>> {
    DatasetArchive::open(archive_path).map(DatasetArchive::into_entries)
}
