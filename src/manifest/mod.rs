//! go.mod loading and dependency selection
//!
//! This module provides functionality to:
//! - Parse require entries from go.mod
//! - Select the pseudo-versioned dependencies among them

mod go_mod;
mod scanner;

pub use go_mod::{load_manifest, GoModParser};
pub use scanner::ManifestScanner;

use crate::domain::Dependency;
use crate::error::ManifestError;
use std::path::Path;

/// Default manifest filename
pub const GO_MOD_FILENAME: &str = "go.mod";

/// Read a go.mod file and return its pseudo-versioned dependencies
pub fn find_pseudo_versioned_deps(
    path: &Path,
    include_indirect: bool,
) -> Result<Vec<Dependency>, ManifestError> {
    let entries = load_manifest(path)?;
    Ok(ManifestScanner::new(include_indirect).scan(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GO_MOD: &str = r#"module test

go 1.25

require (
	github.com/maxmind/mmdbwriter v1.1.1-0.20251215205057-2f3252140e00
	github.com/oschwald/maxminddb-golang/v2 v2.1.1
	go4.org/netipx v0.0.0-20231129151722-fdeea329fbba
)

require (
	github.com/example/indirect v0.0.0-20231129151722-abcdef123456 // indirect
)
"#;

    fn write_go_mod() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(GO_MOD_FILENAME), GO_MOD).unwrap();
        dir
    }

    #[test]
    fn test_find_pseudo_versioned_deps_exclude_indirect() {
        let dir = write_go_mod();
        let deps = find_pseudo_versioned_deps(&dir.path().join(GO_MOD_FILENAME), false).unwrap();

        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].module, "github.com/maxmind/mmdbwriter");
        assert_eq!(deps[0].version, "v1.1.1-0.20251215205057-2f3252140e00");
        assert_eq!(deps[1].module, "go4.org/netipx");
        assert_eq!(deps[1].version, "v0.0.0-20231129151722-fdeea329fbba");
    }

    #[test]
    fn test_find_pseudo_versioned_deps_include_indirect() {
        let dir = write_go_mod();
        let deps = find_pseudo_versioned_deps(&dir.path().join(GO_MOD_FILENAME), true).unwrap();

        assert_eq!(deps.len(), 3);
        assert_eq!(deps[2].module, "github.com/example/indirect");
        assert_eq!(deps[2].version, "v0.0.0-20231129151722-abcdef123456");
    }

    #[test]
    fn test_find_pseudo_versioned_deps_parse_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(GO_MOD_FILENAME);
        fs::write(&path, "require (\n\tgo4.org/netipx v0.0.0-20231129151722-fdeea329fbba\n").unwrap();

        let err = find_pseudo_versioned_deps(&path, false).unwrap_err();
        assert!(matches!(err, ManifestError::GoModParseError { .. }));
    }
}
