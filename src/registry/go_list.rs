//! `go list` resolver
//!
//! Resolves a branch by running `go list -m -json <module>@<branch>`, which
//! honors the user's GOPROXY, GOPRIVATE and credential configuration.

use crate::error::ResolveError;
use crate::registry::go_proxy::UNKNOWN_REVISION;
use crate::registry::VersionResolver;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Default name of the go command
pub const DEFAULT_GO_BINARY: &str = "go";

/// Resolver that shells out to the go command
#[derive(Debug, Clone)]
pub struct GoListResolver {
    go_binary: PathBuf,
}

/// JSON output of `go list -m -json`
#[derive(Debug, Deserialize)]
struct ModuleInfo {
    #[serde(rename = "Path", default)]
    path: String,
    #[serde(rename = "Version", default)]
    version: String,
}

impl GoListResolver {
    /// Create a resolver using the given go binary
    pub fn new(go_binary: impl Into<PathBuf>) -> Self {
        Self {
            go_binary: go_binary.into(),
        }
    }
}

impl Default for GoListResolver {
    fn default() -> Self {
        Self::new(DEFAULT_GO_BINARY)
    }
}

/// Classify a failed `go list` run from its stderr
fn classify_failure(module: &str, branch: &str, stderr: &str) -> ResolveError {
    let message = stderr.trim();
    if message.contains(UNKNOWN_REVISION) {
        ResolveError::unknown_revision(module, branch)
    } else {
        ResolveError::ToolFailed {
            module: module.to_string(),
            branch: branch.to_string(),
            message: message.to_string(),
        }
    }
}

/// Extract the resolved version from `go list -m -json` output
fn parse_module_info(module: &str, branch: &str, stdout: &[u8]) -> Result<String, ResolveError> {
    let info: ModuleInfo = serde_json::from_slice(stdout)
        .map_err(|e| ResolveError::invalid_output(module, branch, e.to_string()))?;

    if info.version.is_empty() {
        return Err(ResolveError::invalid_output(
            module,
            branch,
            format!("no Version in output for {}", info.path),
        ));
    }

    Ok(info.version)
}

#[async_trait]
impl VersionResolver for GoListResolver {
    fn name(&self) -> &'static str {
        "go list"
    }

    async fn resolve(&self, module: &str, branch: &str) -> Result<String, ResolveError> {
        let query = format!("{}@{}", module, branch);
        debug!("running {} list -m -json {}", self.go_binary.display(), query);

        // Dropping the future (cancellation, fail-fast) kills the child process
        let output = Command::new(&self.go_binary)
            .args(["list", "-m", "-json", &query])
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ResolveError::ToolUnavailable {
                tool: self.go_binary.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(module, branch, &stderr));
        }

        parse_module_info(module, branch, &output.stdout)
    }
}
