//! dsextract CLI - unpacks an external dataset archive into the raw data
//! directory.

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::setup_logging(logging::level_for(cli.verbose, cli.quiet))?;

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    commands::extract::execute(&cli, &*formatter).inspect_err(|err| formatter.format_error(err))
}
