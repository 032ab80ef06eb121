//! Selection of pseudo-versioned dependencies from manifest entries

use crate::domain::{Dependency, ManifestEntry};
use crate::parser::is_pseudo_version;
use tracing::debug;

/// Filters manifest entries down to the dependencies worth checking
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestScanner {
    /// Whether `// indirect` entries are included
    include_indirect: bool,
}

impl ManifestScanner {
    /// Create a scanner with the given indirect-inclusion policy
    pub fn new(include_indirect: bool) -> Self {
        Self { include_indirect }
    }

    /// Returns the pseudo-versioned dependencies, preserving manifest order
    pub fn scan(&self, entries: &[ManifestEntry]) -> Vec<Dependency> {
        entries
            .iter()
            .filter(|entry| is_pseudo_version(&entry.version))
            .filter(|entry| {
                let keep = !entry.indirect || self.include_indirect;
                if !keep {
                    debug!("skipping indirect {}", entry);
                }
                keep
            })
            .map(Dependency::from)
            .collect()
    }
}
