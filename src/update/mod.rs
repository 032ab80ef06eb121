//! Update check logic for pseudo-versioned dependencies
//!
//! This module provides:
//! - Default branch resolution with main/master fallback
//! - The update checker that resolves every dependency and collects updates

mod branch;
#[cfg(test)]
pub(crate) mod mock;

pub use branch::{DefaultBranchResolver, DEFAULT_BRANCHES};

use crate::domain::{Dependency, DependencyFailure, Update};
use crate::error::CheckError;
use crate::registry::VersionResolver;
use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default number of dependencies resolved at once
pub const DEFAULT_CONCURRENCY: usize = 8;

/// What to do when a dependency cannot be checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the run and discard partial results
    #[default]
    FailFast,
    /// Record the failure and continue with the remaining dependencies
    KeepGoing,
}

/// Updates found by a check, plus failures recorded under `KeepGoing`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Dependencies with a newer commit, in input order
    pub updates: Vec<Update>,
    /// Dependencies that could not be checked, in input order
    pub failures: Vec<DependencyFailure>,
}

/// Checks dependencies against the tip of their default branch
pub struct UpdateChecker<'a> {
    branches: DefaultBranchResolver<'a>,
    concurrency: usize,
    policy: FailurePolicy,
    cancel: CancellationToken,
}

impl<'a> UpdateChecker<'a> {
    /// Create a checker with default concurrency and fail-fast policy
    pub fn new(resolver: &'a dyn VersionResolver) -> Self {
        Self {
            branches: DefaultBranchResolver::new(resolver),
            concurrency: DEFAULT_CONCURRENCY,
            policy: FailurePolicy::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Set how many dependencies may be resolved at once (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Set the failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a caller-supplied cancellation token
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the dependencies whose version differs from their default
    /// branch tip. The first failure aborts the check.
    pub async fn check_for_updates(&self, deps: &[Dependency]) -> Result<Vec<Update>, CheckError> {
        let outcome = self.run(deps, FailurePolicy::FailFast, |_| {}).await?;
        Ok(outcome.updates)
    }

    /// Check all dependencies under the configured policy, calling
    /// `on_checked` as each dependency completes (in input order).
    pub async fn check(
        &self,
        deps: &[Dependency],
        on_checked: impl FnMut(&Dependency),
    ) -> Result<CheckOutcome, CheckError> {
        self.run(deps, self.policy, on_checked).await
    }

    async fn run(
        &self,
        deps: &[Dependency],
        policy: FailurePolicy,
        mut on_checked: impl FnMut(&Dependency),
    ) -> Result<CheckOutcome, CheckError> {
        let mut results = stream::iter(deps)
            .map(|dep| async move { (dep, self.check_one(dep).await) })
            .buffered(self.concurrency);

        let mut outcome = CheckOutcome::default();

        // Returning early drops the stream, which drops any in-flight lookups
        while let Some((dep, result)) = results.next().await {
            on_checked(dep);
            match result {
                Ok(Some(update)) => outcome.updates.push(update),
                Ok(None) => {}
                Err(CheckError::Cancelled) => return Err(CheckError::Cancelled),
                Err(e) => match policy {
                    FailurePolicy::FailFast => {
                        return Err(CheckError::for_dependency(&dep.module, e));
                    }
                    FailurePolicy::KeepGoing => {
                        debug!("recording failure for {}: {}", dep.module, e);
                        outcome
                            .failures
                            .push(DependencyFailure::new(&dep.module, e.to_string()));
                    }
                },
            }
        }

        Ok(outcome)
    }

    async fn check_one(&self, dep: &Dependency) -> Result<Option<Update>, CheckError> {
        let latest = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(CheckError::Cancelled),
            result = self.branches.resolve_latest(&dep.module) => result?,
        };

        if latest == dep.version {
            debug!("{} is up to date at {}", dep.module, dep.version);
            Ok(None)
        } else {
            Ok(Some(Update::new(&dep.module, &dep.version, latest)))
        }
    }
}
