//! Text output formatter for human-readable display

use super::{OutputFormatter, Verbosity};
use crate::domain::{CheckSummary, Dependency, Update};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::Write;

/// Text formatter for terminal output
pub struct TextFormatter {
    verbosity: Verbosity,
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn format_dependency_line(&self, dep: &Dependency, writer: &mut dyn Write) -> std::io::Result<()> {
        let marker = if dep.indirect && self.verbosity == Verbosity::Verbose {
            " (indirect)"
        } else {
            ""
        };

        if self.color {
            writeln!(
                writer,
                "  {} {}{}",
                dep.module.bold(),
                dep.version.dimmed(),
                marker.dimmed()
            )
        } else {
            writeln!(writer, "  {} {}{}", dep.module, dep.version, marker)
        }
    }

    /// Commit dates of both sides, e.g. ` (2023/11/01 -> 2023/12/01)`
    fn date_suffix(update: &Update) -> Option<String> {
        let fmt = |d: DateTime<Utc>| d.format("%Y/%m/%d %H:%M").to_string();
        let current = update.current_committed_at().map(fmt)?;
        let latest = update.latest_committed_at().map(fmt)?;
        Some(format!(" ({} -> {})", current, latest))
    }

    fn format_update_line(&self, update: &Update, writer: &mut dyn Write) -> std::io::Result<()> {
        let indent = if self.verbosity == Verbosity::Quiet {
            ""
        } else {
            "  "
        };
        let dates = if self.verbosity == Verbosity::Verbose {
            Self::date_suffix(update).unwrap_or_default()
        } else {
            String::new()
        };

        if self.color {
            writeln!(
                writer,
                "{}{}: {} {} {}{}",
                indent,
                update.module.bold(),
                update.current.dimmed(),
                "->".dimmed(),
                update.latest.bright_green(),
                dates.dimmed()
            )
        } else {
            writeln!(writer, "{}{}{}", indent, update, dates)
        }
    }

    /// Dependencies that could not be checked under --keep-going
    fn format_failures(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if !summary.has_failures() {
            return Ok(());
        }

        self.write_header("Failed to check:", writer)?;
        for failure in &summary.failures {
            if self.color {
                writeln!(writer, "  {}: {}", failure.module.bold(), failure.message.red())?;
            } else {
                writeln!(writer, "  {}", failure)?;
            }
        }
        Ok(())
    }

    fn write_header(&self, text: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{}", text.bold())
        } else {
            writeln!(writer, "{}", text)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            for update in &summary.updates {
                self.format_update_line(update, writer)?;
            }
            return self.format_failures(summary, writer);
        }

        let name = summary.manifest_name();
        if summary.is_empty() {
            return writeln!(writer, "No pseudo-versioned dependencies found in {}.", name);
        }

        self.write_header(&format!("Pseudo-versioned dependencies in {}:", name), writer)?;
        for dep in &summary.dependencies {
            self.format_dependency_line(dep, writer)?;
        }
        writeln!(writer)?;

        if summary.has_updates() {
            self.write_header("Updates available:", writer)?;
            for update in &summary.updates {
                self.format_update_line(update, writer)?;
            }
        } else if !summary.has_failures() {
            if self.color {
                writeln!(
                    writer,
                    "{}",
                    "No updates found for pseudo-versioned dependencies.".green()
                )?;
            } else {
                writeln!(writer, "No updates found for pseudo-versioned dependencies.")?;
            }
        }

        if summary.has_failures() && summary.has_updates() {
            writeln!(writer)?;
        }
        self.format_failures(summary, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyFailure;

    fn render(summary: &CheckSummary, verbosity: Verbosity) -> String {
        let formatter = TextFormatter::new(verbosity, false);
        let mut buf = Vec::new();
        formatter.format(summary, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn summary_with_update() -> CheckSummary {
        let mut summary = CheckSummary::new("/project/go.mod");
        summary.dependencies = vec![
            Dependency::new(
                "github.com/example/module",
                "v0.0.0-20231101000000-abc123abc123",
                false,
            ),
            Dependency::new(
                "github.com/example/transitive",
                "v0.0.0-20231101000000-fedcba987654",
                true,
            ),
        ];
        summary.updates = vec![Update::new(
            "github.com/example/module",
            "v0.0.0-20231101000000-abc123abc123",
            "v0.0.0-20231201000000-def456def456",
        )];
        summary
    }

    #[test]
    fn test_no_pseudo_versions() {
        let output = render(&CheckSummary::new("/project/go.mod"), Verbosity::Normal);
        assert_eq!(output, "No pseudo-versioned dependencies found in go.mod.\n");
    }

    #[test]
    fn test_updates_available() {
        let output = render(&summary_with_update(), Verbosity::Normal);
        assert_eq!(
            output,
            "Pseudo-versioned dependencies in go.mod:\n\
             \x20 github.com/example/module v0.0.0-20231101000000-abc123abc123\n\
             \x20 github.com/example/transitive v0.0.0-20231101000000-fedcba987654\n\
             \n\
             Updates available:\n\
             \x20 github.com/example/module: v0.0.0-20231101000000-abc123abc123 -> v0.0.0-20231201000000-def456def456\n"
        );
    }

    #[test]
    fn test_no_updates() {
        let mut summary = summary_with_update();
        summary.updates.clear();
        let output = render(&summary, Verbosity::Normal);
        assert!(output.ends_with("\nNo updates found for pseudo-versioned dependencies.\n"));
    }

    #[test]
    fn test_quiet_prints_only_updates() {
        let output = render(&summary_with_update(), Verbosity::Quiet);
        assert_eq!(
            output,
            "github.com/example/module: v0.0.0-20231101000000-abc123abc123 -> v0.0.0-20231201000000-def456def456\n"
        );

        let output = render(&CheckSummary::new("go.mod"), Verbosity::Quiet);
        assert!(output.is_empty());
    }

    #[test]
    fn test_verbose_shows_dates_and_indirect() {
        let output = render(&summary_with_update(), Verbosity::Verbose);
        assert!(output.contains("v0.0.0-20231101000000-fedcba987654 (indirect)"));
        assert!(output.contains(" (2023/11/01 00:00 -> 2023/12/01 00:00)"));
    }

    #[test]
    fn test_verbose_skips_dates_for_tagged_latest() {
        let update = Update::new("example.com/m", "v0.0.0-20231101000000-abc123abc123", "v1.2.0");
        assert!(TextFormatter::date_suffix(&update).is_none());
    }

    #[test]
    fn test_failures_listed() {
        let mut summary = summary_with_update();
        summary.updates.clear();
        summary.failures = vec![DependencyFailure::new(
            "github.com/example/transitive",
            "neither main nor master branch found",
        )];
        let output = render(&summary, Verbosity::Normal);
        assert!(!output.contains("No updates found"));
        assert!(output.contains(
            "Failed to check:\n  github.com/example/transitive: neither main nor master branch found\n"
        ));
    }

    #[test]
    fn test_quiet_still_reports_failures() {
        let mut summary = summary_with_update();
        summary.failures = vec![DependencyFailure::new(
            "github.com/example/transitive",
            "neither main nor master branch found",
        )];
        let output = render(&summary, Verbosity::Quiet);
        assert_eq!(
            output,
            "github.com/example/module: v0.0.0-20231101000000-abc123abc123 -> v0.0.0-20231201000000-def456def456\n\
             Failed to check:\n\
             \x20 github.com/example/transitive: neither main nor master branch found\n"
        );
    }

    #[test]
    fn test_colored_output_contains_module() {
        let formatter = TextFormatter::new(Verbosity::Normal, true);
        let mut buf = Vec::new();
        formatter.format(&summary_with_update(), &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("github.com/example/module"));
        assert!(output.contains("v0.0.0-20231201000000-def456def456"));
    }
}
