//! Session observer for the terminal
//!
//! Shows a spinner while a request is in flight and prints quota notices.

use colored::Colorize;
use genie_application::SessionObserver;
use genie_domain::ViewState;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Renders session changes with an indicatif spinner and colored notices
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner: true,
        }
    }

    /// Set whether to show the spinner; notices are always printed
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Generating...");
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ProgressReporter {
    fn on_state_change(&self, state: ViewState) {
        match state {
            ViewState::Submitting if self.show_spinner => self.start_spinner(),
            _ => self.stop_spinner(),
        }
    }

    fn on_quota_warning(&self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message.yellow());
    }

    fn on_quota_denied(&self, message: &str) {
        self.stop_spinner();
        eprintln!("{} {}", "x".red().bold(), message.red().bold());
    }

    fn on_auth_redirect(&self) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            "Sign in to continue: infragenie --sign-in <ID>".bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_state_change(ViewState::Submitting);
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_state_change(ViewState::Succeeded);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_quiet_never_spins() {
        let reporter = ProgressReporter::new().with_spinner(false);
        reporter.on_state_change(ViewState::Submitting);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
