//! Manifest entries and pseudo-versioned dependencies

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `require` entry read from go.mod
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Module path
    pub module: String,
    /// Version string exactly as written in the manifest
    pub version: String,
    /// Whether the entry is marked `// indirect`
    pub indirect: bool,
    /// 1-based line number in the manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ManifestEntry {
    /// Creates a new manifest entry
    pub fn new(module: impl Into<String>, version: impl Into<String>, indirect: bool) -> Self {
        Self {
            module: module.into(),
            version: version.into(),
            indirect,
            line: None,
        }
    }

    /// Creates a direct dependency entry
    pub fn direct(module: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(module, version, false)
    }

    /// Creates an indirect dependency entry
    pub fn indirect(module: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(module, version, true)
    }

    /// Sets the line number this entry was read from (builder pattern)
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// `module version`, plus `(go.mod:12)` when the line is known
impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.module, self.version)?;
        if let Some(line) = self.line {
            write!(f, " (go.mod:{})", line)?;
        }
        Ok(())
    }
}

/// A pseudo-versioned dependency selected for an update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Module path
    pub module: String,
    /// Current pseudo-version
    pub version: String,
    /// Whether this is an indirect dependency
    pub indirect: bool,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(module: impl Into<String>, version: impl Into<String>, indirect: bool) -> Self {
        Self {
            module: module.into(),
            version: version.into(),
            indirect,
        }
    }
}

impl From<&ManifestEntry> for Dependency {
    fn from(entry: &ManifestEntry) -> Self {
        Self::new(entry.module.clone(), entry.version.clone(), entry.indirect)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indirect_marker = if self.indirect { " (indirect)" } else { "" };
        write!(f, "{}@{}{}", self.module, self.version, indirect_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_entry_constructors() {
        let direct = ManifestEntry::direct("go4.org/netipx", "v0.0.0-20231129151722-fdeea329fbba");
        assert!(!direct.indirect);
        assert_eq!(direct.line, None);

        let indirect = ManifestEntry::indirect("golang.org/x/text", "v0.14.0").at_line(12);
        assert!(indirect.indirect);
        assert_eq!(indirect.line, Some(12));
    }

    #[test]
    fn test_manifest_entry_display_includes_line() {
        let entry = ManifestEntry::indirect("golang.org/x/text", "v0.14.0");
        assert_eq!(entry.to_string(), "golang.org/x/text v0.14.0");
        assert_eq!(
            entry.at_line(12).to_string(),
            "golang.org/x/text v0.14.0 (go.mod:12)"
        );
    }

    #[test]
    fn test_dependency_from_entry() {
        let entry = ManifestEntry::indirect("example.com/a", "v0.0.0-20231129151722-fdeea329fbba");
        let dep = Dependency::from(&entry);
        assert_eq!(dep.module, "example.com/a");
        assert_eq!(dep.version, "v0.0.0-20231129151722-fdeea329fbba");
        assert!(dep.indirect);
    }

    #[test]
    fn test_dependency_display() {
        let dep = Dependency::new("example.com/a", "v0.0.0-20231129151722-fdeea329fbba", false);
        assert_eq!(
            dep.to_string(),
            "example.com/a@v0.0.0-20231129151722-fdeea329fbba"
        );

        let dep = Dependency::new("example.com/b", "v0.0.0-20231129151722-fdeea329fbba", true);
        assert!(dep.to_string().ends_with(" (indirect)"));
    }

    #[test]
    fn test_serde_dependency() {
        let dep = Dependency::new("example.com/a", "v0.0.0-20231129151722-fdeea329fbba", false);
        let json = serde_json::to_string(&dep).unwrap();
        let parsed: Dependency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dep);
    }
}
