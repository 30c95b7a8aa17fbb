//! Default data directory resolution.
//!
//! Defaults follow the usual data project layout: archives are dropped into
//! `data/external` and unpacked into `data/raw`, both relative to the
//! project root. Each location can be overridden through the environment.

use anyhow::Context;
use anyhow::Result;
use dsextract_core::ExtractConfig;
use std::env;
use std::path::Path;
use std::path::PathBuf;

/// Overrides the project root (default: current directory).
pub const PROJECT_ROOT_ENV: &str = "DSEXTRACT_PROJECT_ROOT";
/// Overrides the external data directory.
pub const EXTERNAL_DIR_ENV: &str = "DSEXTRACT_EXTERNAL_DIR";
/// Overrides the raw data directory.
pub const RAW_DIR_ENV: &str = "DSEXTRACT_RAW_DIR";

/// File name of the archive looked up in the external directory.
pub const DEFAULT_ARCHIVE_NAME: &str = "dataset.zip";

/// Resolved project data directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirs {
    /// Directory the `data/` tree hangs off.
    pub project_root: PathBuf,
    /// Where the dataset archive is looked up.
    pub external_dir: PathBuf,
    /// Where the archive is unpacked to.
    pub raw_dir: PathBuf,
}

impl DataDirs {
    /// Standard layout under `project_root`.
    pub fn from_root<P: AsRef<Path>>(project_root: P) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        let data = project_root.join("data");
        Self {
            external_dir: data.join("external"),
            raw_dir: data.join("raw"),
            project_root,
        }
    }

    /// Resolves directories from the process environment.
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir().context("failed to get current directory")?;
        Ok(Self::from_lookup(|key| env::var_os(key).map(PathBuf::from), cwd))
    }

    /// Resolves directories using `lookup` for overrides, falling back to
    /// `fallback_root` when no project root is set.
    fn from_lookup<F>(lookup: F, fallback_root: PathBuf) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let root = lookup(PROJECT_ROOT_ENV).unwrap_or(fallback_root);
        let mut dirs = Self::from_root(root);

        if let Some(dir) = lookup(EXTERNAL_DIR_ENV) {
            dirs.external_dir = dir;
        }
        if let Some(dir) = lookup(RAW_DIR_ENV) {
            dirs.raw_dir = dir;
        }

        dirs
    }

    /// Default archive location.
    pub fn default_archive(&self) -> PathBuf {
        self.external_dir.join(DEFAULT_ARCHIVE_NAME)
    }

    /// Builds the extraction config, preferring explicit paths over defaults.
    pub fn extract_config(&self, input: Option<&Path>, output: Option<&Path>) -> ExtractConfig {
        let mut config = ExtractConfig::new(self.default_archive(), &self.raw_dir);
        if let Some(source) = input {
            config = config.with_source_path(source);
        }
        if let Some(destination) = output {
            config = config.with_destination_path(destination);
        }
        config
    }
}
