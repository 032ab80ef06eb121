//! CLI argument parsing module for pseudoup

use crate::error::ConfigError;
use crate::registry::{ResolverConfig, ResolverKind, DEFAULT_GO_BINARY, GO_PROXY_URL};
use crate::update::{FailurePolicy, DEFAULT_CONCURRENCY};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse duration string in format: N (seconds), Ns, Nm (minutes), Nh (hours)
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 60 * 60)
    } else {
        (s, 1)
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in duration: {}", num_str))?;

    if num == 0 {
        return Err("duration must be greater than zero".to_string());
    }

    let secs = num
        .checked_mul(multiplier)
        .ok_or_else(|| format!("duration too large: {}", s))?;

    Ok(Duration::from_secs(secs))
}

/// Check commit-pinned Go dependencies for newer commits on their default branch
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pseudoup",
    version,
    about = "Check pseudo-versioned Go dependencies for newer commits"
)]
pub struct CliArgs {
    /// Path to the go.mod file
    #[arg(default_value = "go.mod")]
    pub manifest: PathBuf,

    /// Include indirect dependencies
    #[arg(short = 'i', long)]
    pub include_indirect: bool,

    // Resolver options
    /// How to resolve the latest commit on a branch
    #[arg(long, value_enum, default_value_t = ResolverKind::Go)]
    pub resolver: ResolverKind,

    /// go command used by the `go` resolver
    #[arg(long, env = "PSEUDOUP_GO", default_value = DEFAULT_GO_BINARY)]
    pub go_binary: PathBuf,

    /// Module proxy URL used by the `proxy` resolver
    #[arg(long, env = "PSEUDOUP_PROXY", default_value = GO_PROXY_URL)]
    pub proxy_url: String,

    /// Number of dependencies checked at once
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Abort the check after this long (e.g., 90, 30s, 5m)
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Keep checking remaining dependencies when one fails
    #[arg(long)]
    pub keep_going: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Only print available updates
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Reject option combinations that cannot be honored
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency {
                value: self.concurrency,
            });
        }
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        Ok(())
    }

    /// Resolver settings from the CLI
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            kind: self.resolver,
            go_binary: self.go_binary.clone(),
            proxy_url: self.proxy_url.clone(),
        }
    }

    /// Failure policy selected by --keep-going
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        }
    }

    /// Whether to draw a progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
