//! Progress reporting over pipeline stages

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} steps | {msg}";

/// Progress bar over the steps of a run; a disabled reporter does nothing
pub struct ProgressReporter {
    enabled: bool,
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter that draws a progress bar once started
    pub fn new() -> Self {
        Self {
            enabled: true,
            progress_bar: None,
        }
    }

    /// Create a reporter that never draws
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            progress_bar: None,
        }
    }

    /// Create the progress bar for `total_steps` steps
    pub fn start(&mut self, total_steps: u64) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_steps);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        debug!("Progress bar initialized for {} steps", total_steps);
        self.progress_bar = Some(pb);
    }

    /// Advance by one step
    pub fn increment(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
        }
    }

    /// Set the message shown next to the bar
    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    /// Finish with a completion message
    pub fn finish(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }

    /// Finish with an error message
    pub fn finish_with_error(&self, error_message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.abandon_with_message(format!("Failed: {}", error_message));
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
