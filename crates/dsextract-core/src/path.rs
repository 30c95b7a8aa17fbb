//! Mapping of archive entry names onto the destination tree.

use std::path::PathBuf;

/// Converts a stored entry name into a path relative to the destination.
///
/// `/` always separates components; `\` does too on Windows, where a
/// leading drive designator is also dropped. Empty, `.` and `..`
/// components are removed, so the result can never climb out of the
/// destination root. A name made only of such components yields an empty
/// path, which addresses the destination root itself.
///
/// # Examples
///
/// ```
/// use dsextract_core::path::resolve_entry_path;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_entry_path("sub/b.txt"), PathBuf::from("sub/b.txt"));
/// assert_eq!(resolve_entry_path("../../etc/passwd"), PathBuf::from("etc/passwd"));
/// assert_eq!(resolve_entry_path("/abs/file"), PathBuf::from("abs/file"));
/// ```
#[must_use]
pub fn resolve_entry_path(name: &str) -> PathBuf {
    let mut components = name.split(is_separator).peekable();

    if cfg!(windows) && components.peek().is_some_and(|first| is_drive(first)) {
        components.next();
    }

    components
        .filter(|part| !matches!(*part, "" | "." | ".."))
        .collect()
}

/// Returns `true` if the stored name marks a directory entry.
#[must_use]
pub fn is_directory_name(name: &str) -> bool {
    name.ends_with('/') || (cfg!(windows) && name.ends_with('\\'))
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

fn is_drive(part: &str) -> bool {
    let bytes = part.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
