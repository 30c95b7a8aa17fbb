//! Progress bar implementation for extraction.

use console::Term;
use dsextract_core::ProgressCallback;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Advances one step per archive entry, so the bar tracks entry count rather
/// than bytes. Automatically cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a progress bar labelled with `message`.
    ///
    /// The length is unknown until `on_start` reports the entry count.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(0);

        // Template: "Extracting files  42% [████████░░░░] 42/100 (1s, 35/s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} {percent:>3}% [{bar:40.cyan/blue}] {pos}/{len} ({elapsed}, {per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        bar.set_message(message.to_string());

        Self { bar }
    }

    /// Checks if we should show progress (the bar draws to stderr).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_entry_done(&mut self, _index: usize, _total: usize, _name: &str) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}
