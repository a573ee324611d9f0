//! Client configuration.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Configuration for a [`Client`](crate::Client).
///
/// Validated exactly once, when the client is constructed; an empty base URL
/// or API key fails construction immediately rather than on first request.
///
/// # Example
///
/// ```no_run
/// use n8n_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://n8n.example.com", "my-api-key")
///     .with_timeout(Duration::from_secs(10))
///     .with_default_header("X-Request-Source", "batch-sync");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the n8n instance. Trailing slashes are stripped.
    pub base_url: String,
    /// API key sent as `X-N8N-API-KEY` on every request.
    pub api_key: String,
    /// Default timeout for every call. `None` disables timeout enforcement.
    pub timeout: Option<Duration>,
    /// Headers merged into every request; per-call headers win on conflict.
    pub default_headers: Vec<(String, String)>,
    /// API version path segment, inserted as `/api/{version}`.
    pub api_version: String,
}

impl ClientConfig {
    /// Create a configuration with the default timeout and API version.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            default_headers: Vec::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Set the default timeout. `Duration::ZERO` disables the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            None
        } else {
            Some(timeout)
        };
        self
    }

    /// Disable timeout enforcement for all calls.
    #[must_use]
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Add a header sent on every request.
    #[must_use]
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Override the API version path segment (default `"v1"`).
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Fail-fast validation, called once from `Client::new`.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("api_key must not be empty".to_string()));
        }
        Ok(())
    }
}
