//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dsextract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ZIP archive to extract [default: <external data dir>/dataset.zip]
    #[arg(long, value_name = "PATH")]
    pub input_path: Option<PathBuf>,

    /// Directory to extract into [default: <raw data dir>]
    #[arg(long, value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
