//! Validated, exclusively owned ZIP archive handle.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use tracing::error;
use zip::ZipArchive;

use crate::ExtractionError;
use crate::Result;
use crate::path::is_directory_name;
use crate::path::resolve_entry_path;

/// What an extracted entry turned into on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractedEntry {
    /// A directory was created (or already existed).
    Directory,
    /// A regular file was written.
    File {
        /// Decompressed bytes written.
        bytes: u64,
    },
}

/// An open ZIP archive whose central directory has already been parsed.
///
/// The entry list is captured once at open time and never re-read. The
/// underlying file handle is released when the value is dropped, which
/// covers the success path and every error path alike.
#[derive(Debug)]
pub struct DatasetArchive {
    path: PathBuf,
    zip: ZipArchive<BufReader<File>>,
    entries: Vec<String>,
}

impl DatasetArchive {
    /// Opens and validates a ZIP archive.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::NotFound` if `path` does not exist. No archive
    ///   I/O is attempted in that case.
    /// - `ExtractionError::InvalidArchive` if the file cannot be opened or
    ///   its structure does not parse as ZIP.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            error!("The file {} does not exist.", path.display());
            return Err(ExtractionError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let zip = File::open(path)
            .map_err(zip::result::ZipError::Io)
            .and_then(|file| ZipArchive::new(BufReader::new(file)))
            .map_err(|e| {
                error!("The file {} is not a valid ZIP archive.", path.display());
                ExtractionError::InvalidArchive {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?;

        let entries = (0..zip.len())
            .filter_map(|index| zip.name_for_index(index))
            .map(str::to_owned)
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            zip,
            entries,
        })
    }

    /// Returns the path the archive was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns entry names in central directory order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consumes the handle and returns the entry list.
    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extracts the entry at `index` under `destination`.
    ///
    /// Directory entries are created with all missing parents. File entries
    /// get their parent directories created, then are truncated and
    /// rewritten, so an existing file of the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error. Decompression and CRC failures from
    /// the ZIP reader surface as `io::Error` too.
    pub fn extract_entry(&mut self, index: usize, destination: &Path) -> io::Result<ExtractedEntry> {
        let mut entry = self.zip.by_index(index).map_err(io::Error::from)?;
        let relative = resolve_entry_path(entry.name());
        let target = destination.join(&relative);

        if is_directory_name(entry.name()) {
            fs::create_dir_all(&target)?;
            return Ok(ExtractedEntry::Directory);
        }

        if relative.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "entry name resolves to the destination root",
            ));
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut output = File::create(&target)?;
        let bytes = io::copy(&mut entry, &mut output)?;
        Ok(ExtractedEntry::File { bytes })
    }
}
