//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing go.mod
//! - VersionError: Malformed pseudo-versions
//! - ResolveError: Failures reported by a version resolver
//! - CheckError: Failures while checking dependencies for updates
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Update check related errors
    #[error(transparent)]
    Check(#[from] CheckError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// go.mod parsing error
    #[error("failed to parse go.mod in {path} at line {line}: {message}")]
    GoModParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Errors related to pseudo-version handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// No 14-digit timestamp in a version that was treated as a pseudo-version
    #[error("no timestamp found in version {version:?}")]
    NoTimestampFound { version: String },
}

/// Errors reported by a version resolver for a single module@branch query
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The requested branch or revision does not exist
    #[error("unknown revision {branch} for {module}")]
    UnknownRevision { module: String, branch: String },

    /// The resolver tool could not be started
    #[error("failed to run {tool}: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The resolver tool exited with an error
    #[error("{message}")]
    ToolFailed {
        module: String,
        branch: String,
        message: String,
    },

    /// The resolver produced output that could not be understood
    #[error("parsing module info for {module}@{branch}: {message}")]
    InvalidOutput {
        module: String,
        branch: String,
        message: String,
    },

    /// The module does not exist at all
    #[error("module '{module}' not found: {message}")]
    ModuleNotFound { module: String, message: String },

    /// Network request failed
    #[error("failed to fetch '{module}': {message}")]
    Network { module: String, message: String },

    /// Timeout
    #[error("timeout while fetching '{module}'")]
    Timeout { module: String },

    /// Unexpected HTTP status
    #[error("unexpected HTTP {status} for '{module}'")]
    Http { module: String, status: u16 },
}

/// Errors that abort an update check
#[derive(Error, Debug)]
pub enum CheckError {
    /// Version comparison failed
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Resolver failure other than an unknown branch
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// None of the candidate default branches exist
    #[error("neither main nor master branch found")]
    NoDefaultBranchFound { module: String },

    /// Failure annotated with the dependency being checked
    #[error("checking {module}: {source}")]
    Dependency {
        module: String,
        #[source]
        source: Box<CheckError>,
    },

    /// The run was cancelled before it completed
    #[error("update check cancelled")]
    Cancelled,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid concurrency value
    #[error("invalid concurrency '{value}': expected a value of at least 1")]
    InvalidConcurrency { value: usize },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new GoModParseError
    pub fn go_mod_parse_error(
        path: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        ManifestError::GoModParseError {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new UnknownRevision error
    pub fn unknown_revision(module: impl Into<String>, branch: impl Into<String>) -> Self {
        ResolveError::UnknownRevision {
            module: module.into(),
            branch: branch.into(),
        }
    }

    /// Creates a new InvalidOutput error
    pub fn invalid_output(
        module: impl Into<String>,
        branch: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ResolveError::InvalidOutput {
            module: module.into(),
            branch: branch.into(),
            message: message.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(module: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::Network {
            module: module.into(),
            message: message.into(),
        }
    }

    /// Returns true when the branch does not exist and the next candidate may be tried
    pub fn is_unknown_revision(&self) -> bool {
        matches!(self, ResolveError::UnknownRevision { .. })
    }
}

impl CheckError {
    /// Wraps an error with the module path it occurred for
    pub fn for_dependency(module: impl Into<String>, source: CheckError) -> Self {
        CheckError::Dependency {
            module: module.into(),
            source: Box::new(source),
        }
    }

    /// Returns true if this error, or the error it wraps, is a cancellation
    pub fn is_cancelled(&self) -> bool {
        match self {
            CheckError::Cancelled => true,
            CheckError::Dependency { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}
