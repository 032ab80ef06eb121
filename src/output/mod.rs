//! Rendering of check results as a text report or JSON

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::CheckSummary;
use std::io::Write;

/// How much the text report shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Update lines only
    Quiet,
    #[default]
    Normal,
    /// Adds commit dates and indirect markers
    Verbose,
}

/// Report settings derived from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit JSON instead of text
    pub json: bool,
    pub verbosity: Verbosity,
    /// ANSI colors in the text report
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_cli(false, false, false, true)
    }
}

impl OutputConfig {
    /// `--quiet` wins over `--verbose`
    pub fn from_cli(json: bool, verbose: bool, quiet: bool, color: bool) -> Self {
        let verbosity = match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        };

        Self {
            json,
            verbosity,
            color,
        }
    }
}

/// Renders a check summary
pub trait OutputFormatter {
    fn format(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Pick the JSON or text formatter
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    if config.json {
        Box::new(JsonFormatter::new(config.verbosity))
    } else {
        Box::new(TextFormatter::new(config.verbosity, config.color))
    }
}
