//! JSON output formatter for machine processing

use super::{OutputFormatter, Verbosity};
use crate::domain::CheckSummary;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    verbosity: Verbosity,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    manifest: String,
    dependencies: Vec<JsonDependency<'a>>,
    updates: Vec<JsonUpdate<'a>>,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonDependency<'a> {
    module: &'a str,
    version: &'a str,
    indirect: bool,
}

#[derive(Serialize)]
struct JsonUpdate<'a> {
    module: &'a str,
    current: &'a str,
    latest: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_time: Option<String>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    module: &'a str,
    message: &'a str,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn to_json<'a>(&self, summary: &'a CheckSummary) -> JsonOutput<'a> {
        let with_times = self.verbosity == Verbosity::Verbose;

        JsonOutput {
            manifest: summary.manifest.display().to_string(),
            dependencies: summary
                .dependencies
                .iter()
                .map(|d| JsonDependency {
                    module: &d.module,
                    version: &d.version,
                    indirect: d.indirect,
                })
                .collect(),
            updates: summary
                .updates
                .iter()
                .map(|u| JsonUpdate {
                    module: &u.module,
                    current: &u.current,
                    latest: &u.latest,
                    current_time: with_times
                        .then(|| u.current_committed_at().map(|t| t.to_rfc3339()))
                        .flatten(),
                    latest_time: with_times
                        .then(|| u.latest_committed_at().map(|t| t.to_rfc3339()))
                        .flatten(),
                })
                .collect(),
            errors: summary
                .failures
                .iter()
                .map(|f| JsonError {
                    module: &f.module,
                    message: &f.message,
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.to_json(summary);
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
