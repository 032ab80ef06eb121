//! Go Module Proxy resolver
//!
//! Resolves a branch to a version through the GOPROXY protocol:
//! - Version query: {proxy}/{module}/@v/{branch}.info
//!
//! The proxy answers a branch query with the pseudo-version of the branch tip,
//! and with a 404/410 whose body mentions "unknown revision" when the branch
//! does not exist.

use crate::error::ResolveError;
use crate::registry::{HttpClient, VersionResolver};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// Go Module Proxy base URL
pub const GO_PROXY_URL: &str = "https://proxy.golang.org";

/// Marker the proxy and the go command use for a missing branch or commit
pub(crate) const UNKNOWN_REVISION: &str = "unknown revision";

/// Resolver backed by a Go module proxy
pub struct GoProxyResolver {
    client: HttpClient,
    base_url: String,
}

/// Version info response
#[derive(Debug, Deserialize)]
struct VersionInfoResponse {
    /// Version string
    #[serde(rename = "Version")]
    version: String,
    /// Commit time
    #[serde(rename = "Time", default)]
    time: Option<String>,
}

impl GoProxyResolver {
    /// Create a resolver for the given proxy base URL
    pub fn new(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a version query
    fn build_info_url(&self, module: &str, branch: &str) -> String {
        format!(
            "{}/{}/@v/{}.info",
            self.base_url,
            escape_path(module),
            escape_path(branch)
        )
    }
}

/// Case-encode a module path or version for the proxy: uppercase letters
/// become `!` followed by the lowercase letter
fn escape_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch.is_uppercase() {
            encoded.push('!');
            encoded.extend(ch.to_lowercase());
        } else {
            encoded.push(ch);
        }
    }
    encoded
}

#[async_trait]
impl VersionResolver for GoProxyResolver {
    fn name(&self) -> &'static str {
        "Go Proxy"
    }

    async fn resolve(&self, module: &str, branch: &str) -> Result<String, ResolveError> {
        let url = self.build_info_url(module, branch);
        debug!("querying {}", url);

        let response = self.client.get(&url, module).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            let body = response.text().await.unwrap_or_default();
            let message = body.trim().to_string();
            if message.contains(UNKNOWN_REVISION) {
                return Err(ResolveError::unknown_revision(module, branch));
            }
            return Err(ResolveError::ModuleNotFound {
                module: module.to_string(),
                message,
            });
        }

        if !status.is_success() {
            return Err(ResolveError::Http {
                module: module.to_string(),
                status: status.as_u16(),
            });
        }

        let info: VersionInfoResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::invalid_output(module, branch, e.to_string()))?;

        if info.version.is_empty() {
            return Err(ResolveError::invalid_output(module, branch, "empty Version field"));
        }

        debug!(
            "{}@{} resolved to {} (committed {})",
            module,
            branch,
            info.version,
            info.time.as_deref().unwrap_or("unknown")
        );
        Ok(info.version)
    }
}
