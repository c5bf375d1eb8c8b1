//! CLI presenter for output formatting

use std::sync::Mutex;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting.
///
/// Status lines go to stderr; stdout is left to the title prompt. The
/// upload bar is created lazily on the first progress update and cleared
/// when the upload finishes either way.
pub struct Presenter {
    upload_bar: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            upload_bar: Mutex::new(None),
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Update the upload progress bar (0-100)
    pub fn upload_progress(&self, percent: u8) {
        let mut guard = self.upload_bar.lock().unwrap();
        let bar = guard.get_or_insert_with(|| {
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  Uploading [{bar:30.cyan/blue}] {pos:>3}%")
                    .unwrap()
                    .progress_chars("█░ "),
            );
            bar
        });
        bar.set_position(u64::from(percent.min(100)));
    }

    /// Clear the upload bar, if one is showing
    pub fn upload_done(&self) {
        if let Some(bar) = self.upload_bar.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
