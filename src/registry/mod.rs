//! Version resolvers for module@branch queries
//!
//! This module provides:
//! - The `VersionResolver` trait the update check depends on
//! - A resolver that runs `go list -m -json`
//! - A resolver that queries a Go module proxy over HTTP
//! - HTTP client shared foundation with retry logic

mod client;
mod go_list;
mod go_proxy;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use go_list::{GoListResolver, DEFAULT_GO_BINARY};
pub use go_proxy::{GoProxyResolver, GO_PROXY_URL};

use crate::error::ResolveError;
use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolves the version at the tip of a branch of a module's repository
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Get the resolver name
    fn name(&self) -> &'static str;

    /// Resolve `module@branch` to a version string.
    ///
    /// A branch that does not exist must be reported as
    /// `ResolveError::UnknownRevision`; every other error is treated as fatal.
    async fn resolve(&self, module: &str, branch: &str) -> Result<String, ResolveError>;
}

/// Available resolver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// Run `go list -m -json module@branch`
    #[default]
    Go,
    /// Query a Go module proxy directly
    Proxy,
}

/// Settings for building a resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Which backend to use
    pub kind: ResolverKind,
    /// go command used by the `go` backend
    pub go_binary: PathBuf,
    /// Proxy base URL used by the `proxy` backend
    pub proxy_url: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            kind: ResolverKind::default(),
            go_binary: PathBuf::from(DEFAULT_GO_BINARY),
            proxy_url: GO_PROXY_URL.to_string(),
        }
    }
}

/// Create a resolver for the given configuration
pub fn create_resolver(config: &ResolverConfig) -> Result<Box<dyn VersionResolver>, ResolveError> {
    match config.kind {
        ResolverKind::Go => Ok(Box::new(GoListResolver::new(&config.go_binary))),
        ResolverKind::Proxy => {
            let client = HttpClient::new()?;
            Ok(Box::new(GoProxyResolver::new(client, &config.proxy_url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_kind_default() {
        assert_eq!(ResolverKind::default(), ResolverKind::Go);
    }

    #[test]
    fn test_create_go_resolver() {
        let resolver = create_resolver(&ResolverConfig::default()).unwrap();
        assert_eq!(resolver.name(), "go list");
    }

    #[test]
    fn test_create_proxy_resolver() {
        let config = ResolverConfig {
            kind: ResolverKind::Proxy,
            ..ResolverConfig::default()
        };
        let resolver = create_resolver(&config).unwrap();
        assert_eq!(resolver.name(), "Go Proxy");
    }
}
