//! Update check result types

use crate::parser::PseudoVersion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dependency whose pinned commit differs from the default branch tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Module path
    pub module: String,
    /// Version currently in the manifest
    pub current: String,
    /// Version at the tip of the default branch
    pub latest: String,
}

impl Update {
    /// Creates a new update
    pub fn new(
        module: impl Into<String>,
        current: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            current: current.into(),
            latest: latest.into(),
        }
    }

    /// Commit time of the current version, if it is a pseudo-version
    pub fn current_committed_at(&self) -> Option<DateTime<Utc>> {
        PseudoVersion::parse(&self.current)?.committed_at()
    }

    /// Commit time of the latest version, if it is a pseudo-version
    pub fn latest_committed_at(&self) -> Option<DateTime<Utc>> {
        PseudoVersion::parse(&self.latest)?.committed_at()
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.module, self.current, self.latest)
    }
}

/// A dependency that could not be checked (collected with --keep-going)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyFailure {
    /// Module path
    pub module: String,
    /// Error message
    pub message: String,
}

impl DependencyFailure {
    /// Creates a new failure record
    pub fn new(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DependencyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.module, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_display() {
        let update = Update::new(
            "github.com/example/module",
            "v0.0.0-20231101000000-abc123abc123",
            "v0.0.0-20231201000000-def456def456",
        );
        assert_eq!(
            update.to_string(),
            "github.com/example/module: v0.0.0-20231101000000-abc123abc123 -> v0.0.0-20231201000000-def456def456"
        );
    }

    #[test]
    fn test_update_commit_times() {
        let update = Update::new(
            "github.com/example/module",
            "v0.0.0-20231101000000-abc123abc123",
            "v0.0.0-20231201000000-def456def456",
        );
        assert!(update.current_committed_at().unwrap() < update.latest_committed_at().unwrap());
    }

    #[test]
    fn test_update_commit_time_for_tagged_latest() {
        let update = Update::new("example.com/m", "v0.0.0-20231101000000-abc123abc123", "v1.2.3");
        assert!(update.latest_committed_at().is_none());
    }

    #[test]
    fn test_failure_display() {
        let failure = DependencyFailure::new("example.com/m", "neither main nor master branch found");
        assert_eq!(
            failure.to_string(),
            "example.com/m: neither main nor master branch found"
        );
    }
}
