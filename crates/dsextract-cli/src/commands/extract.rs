//! Extract command implementation.

use crate::cli::Cli;
use crate::config::DataDirs;
use crate::error::add_extraction_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use dsextract_core::NoopProgress;
use dsextract_core::extract;
use tracing::debug;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let dirs = DataDirs::load()?;
    debug!(
        project_root = %dirs.project_root.display(),
        external_dir = %dirs.external_dir.display(),
        raw_dir = %dirs.raw_dir.display(),
        "resolved data directories"
    );

    let config = dirs.extract_config(cli.input_path.as_deref(), cli.output_path.as_deref());

    let report = if wants_progress_bar(cli) && CliProgress::should_show() {
        let mut progress = CliProgress::new("Extracting files");
        add_extraction_context(extract(&config, &mut progress))?
    } else {
        add_extraction_context(extract(&config, &mut NoopProgress))?
    };

    formatter.format_extraction_result(&config, &report)?;

    Ok(())
}

/// Progress bar is for plain human runs only. Verbose runs log one debug
/// line per entry to stderr, which would tear through the bar.
fn wants_progress_bar(cli: &Cli) -> bool {
    !cli.quiet && !cli.json && !cli.verbose
}
