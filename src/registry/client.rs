//! HTTP transport for module proxy lookups
//!
//! Transport failures and 429 responses are retried with exponential
//! backoff. Every other response goes back to the caller untouched so a
//! 404 body can still be inspected for "unknown revision".

use crate::error::ResolveError;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::warn;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("pseudoup/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// reqwest client with retry on transient failures
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ResolveError::network_error("", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request, retrying transport failures and rate limiting.
    ///
    /// Any other response is returned as-is, including 4xx statuses, so the
    /// caller can classify it from the body.
    pub async fn get(&self, url: &str, module: &str) -> Result<Response, ResolveError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            match self.client.get(url).send().await {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    last_error = Some(ResolveError::Http {
                        module: module.to_string(),
                        status: response.status().as_u16(),
                    });
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    last_error = Some(if e.is_timeout() {
                        ResolveError::Timeout {
                            module: module.to_string(),
                        }
                    } else {
                        ResolveError::network_error(module, e.to_string())
                    });
                }
            }

            if attempt < self.max_retries {
                warn!(
                    "request to {} failed (attempt {}/{}), retrying in {}ms",
                    url,
                    attempt + 1,
                    self.max_retries + 1,
                    delay
                );
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay *= 2;
            }
        }

        Err(last_error.unwrap_or_else(|| ResolveError::network_error(module, "unknown error")))
    }
}
