//! Progress bar for default branch lookups
//!
//! Drawn on stderr with indicatif; indicatif hides it when stderr is not a
//! terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len} ({eta})";

/// Tracks how many dependencies have been checked
pub struct Progress {
    /// Off in quiet and JSON modes
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Show a bar sized to the number of dependencies about to be resolved
    pub fn start(&mut self, dependencies: usize) {
        if !self.enabled || dependencies == 0 {
            return;
        }

        let bar = ProgressBar::new(dependencies as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.set_message("Resolving default branches");
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Record that `module` has been checked
    pub fn checked(&self, module: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Checked {}", module));
            bar.inc(1);
        }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_draws_nothing() {
        let mut progress = Progress::disabled();
        progress.start(10);
        assert!(progress.bar.is_none());
        progress.checked("go4.org/netipx");
        assert_eq!(progress.position(), 0);
        progress.finish();
    }

    #[test]
    fn test_no_bar_for_empty_run() {
        let mut progress = Progress::new(true);
        progress.start(0);
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_checked_advances_bar() {
        let mut progress = Progress::new(true);
        progress.start(3);
        progress.checked("go4.org/netipx");
        progress.checked("github.com/example/module");
        assert_eq!(progress.position(), 2);
        progress.finish();
        assert!(progress.bar.is_none());
    }
}
