//! Integration tests for dsextract-core.
//!
//! These tests verify end-to-end extraction against a real filesystem.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dsextract_core::ExtractConfig;
use dsextract_core::ExtractionError;
use dsextract_core::NoopProgress;
use dsextract_core::extract;
use dsextract_core::extract_archive;
use dsextract_core::test_utils::ZipTestBuilder;
use dsextract_core::test_utils::create_test_zip;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::CompressionMethod;

fn write_zip(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}

/// Collects every file under `root` as (relative path, content), sorted.
fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                out.push((path.strip_prefix(root).unwrap().to_path_buf(), Vec::new()));
                walk(root, &path, out);
            } else {
                let content = fs::read(&path).unwrap();
                out.push((path.strip_prefix(root).unwrap().to_path_buf(), content));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn test_end_to_end_dataset() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &create_test_zip(vec![("a.txt", b"hello"), ("sub/b.txt", b"world")]),
    );
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    let report = extract_archive(&archive, &out).unwrap();

    assert_eq!(report.entries_total, 2);
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(out.join("sub/b.txt")).unwrap(), "world");
}

#[test]
fn test_missing_source_is_not_found() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    let err = extract_archive(temp.path().join("nope.zip"), &out).unwrap_err();

    assert!(matches!(err, ExtractionError::NotFound { .. }));
    assert!(!out.exists(), "destination must not be created");
}

#[test]
fn test_renamed_text_file_is_invalid_archive() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(temp.path(), "dataset.zip", b"id,value\n1,2\n");
    let out = temp.path().join("out");

    let err = extract_archive(&archive, &out).unwrap_err();

    match err {
        ExtractionError::InvalidArchive { path, reason } => {
            assert_eq!(path, archive);
            assert!(!reason.is_empty());
        }
        other => panic!("expected InvalidArchive, got {other:?}"),
    }
    assert!(!out.exists(), "destination must not be created");
}

#[test]
fn test_empty_file_is_invalid_archive() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(temp.path(), "dataset.zip", b"");

    let err = extract_archive(&archive, temp.path().join("out")).unwrap_err();
    assert!(matches!(err, ExtractionError::InvalidArchive { .. }));
}

#[test]
fn test_all_entries_present_and_identical() {
    let temp = TempDir::new().unwrap();
    let payload: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &ZipTestBuilder::new()
            .add_directory("train/")
            .add_file("train/x.csv", b"1,2,3\n")
            .add_deflated_file("train/blob.bin", &payload)
            .add_directory("empty/")
            .add_file("README", b"readme")
            .build(),
    );
    let out = temp.path().join("raw");

    let report = extract(&ExtractConfig::new(&archive, &out), &mut NoopProgress).unwrap();

    assert_eq!(report.entries_total, 5);
    assert_eq!(report.files_extracted, 3);
    assert_eq!(report.directories_created, 2);
    assert_eq!(report.bytes_written, 6 + 10_000 + 6);
    assert!(out.join("empty").is_dir());
    assert_eq!(fs::read(out.join("train/x.csv")).unwrap(), b"1,2,3\n");
    assert_eq!(fs::read(out.join("train/blob.bin")).unwrap(), payload);
    assert_eq!(fs::read(out.join("README")).unwrap(), b"readme");
}

#[test]
fn test_rerun_produces_same_content() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &ZipTestBuilder::new()
            .add_directory("sub/")
            .add_file("sub/b.txt", b"world")
            .add_file("a.txt", b"hello")
            .build(),
    );
    let out = temp.path().join("out");

    extract_archive(&archive, &out).unwrap();
    let first = snapshot(&out);

    extract_archive(&archive, &out).unwrap();
    let second = snapshot(&out);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_archive_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &create_test_zip(vec![("a.txt", b"hello")]),
    );
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("a.txt"), "a much longer stale content").unwrap();
    fs::write(out.join("keep.txt"), "untouched").unwrap();

    extract_archive(&archive, &out).unwrap();

    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(out.join("keep.txt")).unwrap(), "untouched");
}

#[test]
fn test_failure_stops_at_failing_entry() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &ZipTestBuilder::new()
            .add_file("a.txt", b"first")
            .add_file("blocked/b.txt", b"second")
            .add_file("c.txt", b"third")
            .build(),
    );
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();
    // A regular file where a directory is needed makes entry 2 fail.
    fs::write(out.join("blocked"), "not a directory").unwrap();

    let err = extract_archive(&archive, &out).unwrap_err();

    assert_eq!(err.entry(), Some("blocked/b.txt"));
    assert!(err.is_retryable());
    assert!(matches!(err, ExtractionError::Io { .. }));
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "first");
    assert_eq!(
        fs::read_to_string(out.join("blocked")).unwrap(),
        "not a directory"
    );
    assert!(!out.join("c.txt").exists());
}

#[test]
fn test_traversal_entries_land_inside_destination() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &ZipTestBuilder::new()
            .add_file("../../outside.txt", b"caught")
            .build(),
    );
    let out = temp.path().join("nested").join("out");

    extract_archive(&archive, &out).unwrap();

    assert_eq!(fs::read_to_string(out.join("outside.txt")).unwrap(), "caught");
    assert!(!temp.path().join("outside.txt").exists());
}

#[test]
fn test_later_entry_with_same_name_wins() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &create_test_zip(vec![("a.txt", b"first"), ("./a.txt", b"later")]),
    );
    let out = temp.path().join("out");

    let report = extract_archive(&archive, &out).unwrap();

    assert_eq!(report.entries_total, 2);
    assert_eq!(report.files_extracted, 2);
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "later");
}

#[test]
fn test_file_entry_resolving_to_destination_root_fails() {
    let temp = TempDir::new().unwrap();
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &ZipTestBuilder::new()
            .add_file("ok.txt", b"kept")
            .add_file("..", b"nowhere to go")
            .add_file("after.txt", b"never written")
            .build(),
    );
    let out = temp.path().join("out");

    let err = extract_archive(&archive, &out).unwrap_err();

    match err {
        ExtractionError::Io { entry, source } => {
            assert_eq!(entry, "..");
            assert_eq!(source.kind(), io::ErrorKind::InvalidInput);
        }
        other => panic!("expected Io, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(out.join("ok.txt")).unwrap(), "kept");
    assert!(!out.join("after.txt").exists());
}

#[test]
fn test_bzip2_and_zstd_entries_extract() {
    let temp = TempDir::new().unwrap();
    let payload: Vec<u8> = b"id,label\n".repeat(500);
    let archive = write_zip(
        temp.path(),
        "dataset.zip",
        &ZipTestBuilder::new()
            .add_file_with_method("train.csv", &payload, CompressionMethod::Bzip2)
            .add_file_with_method("test.csv", b"id,label\n7,cat\n", CompressionMethod::Zstd)
            .build(),
    );
    let out = temp.path().join("out");

    let report = extract_archive(&archive, &out).unwrap();

    assert_eq!(report.files_extracted, 2);
    assert_eq!(fs::read(out.join("train.csv")).unwrap(), payload);
    assert_eq!(
        fs::read_to_string(out.join("test.csv")).unwrap(),
        "id,label\n7,cat\n"
    );
}
