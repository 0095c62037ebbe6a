use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const MANIFEST_BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ports - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Keeps stdout free for the rendered graph, so `depend-info --dot > deps.dot`
/// produces a clean file. Manifest loading is shown as an indicatif bar.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn manifest_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(MANIFEST_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64).with_style(style);
        *slot = Some(pb.clone());
        pb
    }

    fn clear_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.manifest_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_full_cycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("📖 Loading port manifests from: ports");
        reporter.report_progress(1, 2, Some("curl"));
        reporter.report_progress(2, 2, Some("zlib"));
        reporter.report_completion("✅ Loaded 2 package(s)");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_bar_is_reused_between_updates() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 3, None);
        reporter.report_progress(2, 3, None);

        let bar = reporter.progress_bar.borrow();
        let bar = bar.as_ref().unwrap();
        assert_eq!(bar.length(), Some(3));
        assert_eq!(bar.position(), 2);
    }

    #[test]
    fn test_error_clears_bar() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 5, Some("curl"));
        reporter.report_error("❌ Failed to load manifest: ports/curl/port.toml");
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
