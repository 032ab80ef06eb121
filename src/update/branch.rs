//! Default branch resolution
//!
//! A repository's default branch is usually `main` or `master`. Both are
//! queried in order; a missing branch falls through to the next candidate and
//! when both exist the one with the newer commit wins.

use crate::error::CheckError;
use crate::parser::newer_version;
use crate::registry::VersionResolver;
use tracing::debug;

/// Candidate default branch names, in order of preference
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];

/// Resolves the latest version on a module's default branch
pub struct DefaultBranchResolver<'a> {
    resolver: &'a dyn VersionResolver,
}

impl<'a> DefaultBranchResolver<'a> {
    /// Create a resolver on top of a module@branch resolver
    pub fn new(resolver: &'a dyn VersionResolver) -> Self {
        Self { resolver }
    }

    /// Resolve the version at the tip of the module's default branch.
    ///
    /// An unknown revision moves on to the next candidate. Any other resolver
    /// error is returned immediately and the remaining candidates are not
    /// queried.
    pub async fn resolve_latest(&self, module: &str) -> Result<String, CheckError> {
        let mut versions = Vec::with_capacity(DEFAULT_BRANCHES.len());

        for branch in DEFAULT_BRANCHES {
            match self.resolver.resolve(module, branch).await {
                Ok(version) => {
                    debug!("{}@{} is {}", module, branch, version);
                    versions.push(version);
                }
                Err(e) if e.is_unknown_revision() => {
                    debug!("{} has no {} branch", module, branch);
                }
                Err(e) => return Err(e.into()),
            }
        }

        match versions.as_slice() {
            [] => Err(CheckError::NoDefaultBranchFound {
                module: module.to_string(),
            }),
            [only] => Ok(only.clone()),
            [first, second, ..] => Ok(newer_version(first, second)?.to_string()),
        }
    }
}
