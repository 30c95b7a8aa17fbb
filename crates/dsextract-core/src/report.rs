//! Extraction reporting and progress callbacks.

use std::time::Duration;

/// Report of a completed extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Number of entries listed in the archive's central directory.
    pub entries_total: usize,

    /// Number of file entries written.
    pub files_extracted: usize,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Total decompressed bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries actually processed.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}

/// Callback trait for per-entry progress during extraction.
///
/// Progress is measured in entries, not bytes: every entry advances the
/// indicator by exactly one unit regardless of its size.
///
/// # Examples
///
/// ```
/// use dsextract_core::ProgressCallback;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_done(&mut self, index: usize, total: usize, name: &str) {
///         println!("[{index}/{total}] {name}");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called once after the entry list is read, before any entry is written.
    fn on_start(&mut self, _total: usize) {}

    /// Called after an entry has been extracted.
    ///
    /// # Arguments
    ///
    /// * `index` - Entry number (1-indexed)
    /// * `total` - Total number of entries in the archive
    /// * `name` - Entry name as stored in the archive
    fn on_entry_done(&mut self, index: usize, total: usize, name: &str);

    /// Called once after the last entry succeeded.
    fn on_complete(&mut self) {}
}

/// `ProgressCallback` that ignores every update.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_done(&mut self, _index: usize, _total: usize, _name: &str) {}
}
