//! Result summary for a single update check run

use super::{Dependency, DependencyFailure, Update};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a run produced for one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Path to the manifest that was checked
    pub manifest: PathBuf,
    /// Pseudo-versioned dependencies that were checked, in manifest order
    pub dependencies: Vec<Dependency>,
    /// Dependencies with a newer commit on their default branch
    pub updates: Vec<Update>,
    /// Dependencies that could not be checked (only with --keep-going)
    #[serde(default)]
    pub failures: Vec<DependencyFailure>,
}

impl CheckSummary {
    /// Creates an empty summary for a manifest
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            dependencies: Vec::new(),
            updates: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns true if any update was found
    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }

    /// Returns true if any dependency could not be checked
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if the manifest contains no pseudo-versioned dependencies
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Display name of the manifest file
    pub fn manifest_name(&self) -> String {
        self.manifest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.manifest.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = CheckSummary::new("/project/go.mod");
        assert!(summary.is_empty());
        assert!(!summary.has_updates());
        assert!(!summary.has_failures());
        assert_eq!(summary.manifest_name(), "go.mod");
    }

    #[test]
    fn test_summary_with_updates_and_failures() {
        let mut summary = CheckSummary::new("go.mod");
        summary.dependencies.push(Dependency::new(
            "example.com/a",
            "v0.0.0-20231101000000-abc123abc123",
            false,
        ));
        summary.updates.push(Update::new(
            "example.com/a",
            "v0.0.0-20231101000000-abc123abc123",
            "v0.0.0-20231201000000-def456def456",
        ));
        summary
            .failures
            .push(DependencyFailure::new("example.com/b", "boom"));

        assert!(!summary.is_empty());
        assert!(summary.has_updates());
        assert!(summary.has_failures());
    }
}
