//! Orchestrator for coordinating the check workflow
//!
//! This module provides:
//! - Workflow coordination: load → scan → resolve → compare
//! - Resolver selection from CLI configuration
//! - Cancellation and overall deadline handling
//! - Progress display while dependencies are resolved

use crate::cli::CliArgs;
use crate::domain::CheckSummary;
use crate::error::{AppError, CheckError};
use crate::manifest::find_pseudo_versioned_deps;
use crate::progress::Progress;
use crate::registry::{create_resolver, VersionResolver};
use crate::update::UpdateChecker;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Resolver for module@branch queries
    resolver: Box<dyn VersionResolver>,
    /// Cancels in-flight resolution when triggered
    cancel: CancellationToken,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        args.validate()?;
        let resolver = create_resolver(&args.resolver_config()).map_err(CheckError::from)?;
        Ok(Self::with_resolver(args, resolver))
    }

    /// Create an orchestrator with a custom resolver
    pub fn with_resolver(args: CliArgs, resolver: Box<dyn VersionResolver>) -> Self {
        Self {
            args,
            resolver,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that cancels the run when triggered (e.g., on Ctrl-C)
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the check workflow
    pub async fn run(&self) -> Result<CheckSummary, AppError> {
        self.run_with_progress(self.args.show_progress()).await
    }

    /// Run the check workflow with optional progress display
    pub async fn run_with_progress(&self, show_progress: bool) -> Result<CheckSummary, AppError> {
        let mut summary = CheckSummary::new(&self.args.manifest);

        // Step 1: Read the manifest and select pseudo-versioned dependencies
        let deps = find_pseudo_versioned_deps(&self.args.manifest, self.args.include_indirect)?;
        info!(
            "found {} pseudo-versioned dependencies in {}",
            deps.len(),
            self.args.manifest.display()
        );

        if deps.is_empty() {
            return Ok(summary);
        }

        // Step 2: Resolve each dependency's default branch
        let checker = UpdateChecker::new(self.resolver.as_ref())
            .with_concurrency(self.args.concurrency)
            .with_policy(self.args.failure_policy())
            .with_cancellation(self.cancel.clone());

        let mut progress = Progress::new(show_progress);
        progress.start(deps.len());

        let check = checker.check(&deps, |dep| progress.checked(&dep.module));

        let result = match self.args.timeout {
            Some(limit) => match tokio::time::timeout(limit, check).await {
                Ok(result) => result,
                Err(_) => {
                    self.cancel.cancel();
                    Err(CheckError::Cancelled)
                }
            },
            None => check.await,
        };
        progress.finish();

        let outcome = result?;
        info!(
            "{} updates, {} failures",
            outcome.updates.len(),
            outcome.failures.len()
        );

        summary.dependencies = deps;
        summary.updates = outcome.updates;
        summary.failures = outcome.failures;
        Ok(summary)
    }
}
