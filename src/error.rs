//! Error types for the n8n client.

use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when using the n8n client.
#[derive(Debug, Error)]
pub enum Error {
    /// The client configuration is invalid (empty base URL, empty API key,
    /// malformed header). Raised at construction or request-build time,
    /// never from transport state.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The server returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request did not complete within the effective timeout.
    #[error("request timed out after {} ms", .timeout.as_millis())]
    Timeout {
        /// The effective timeout that was enforced.
        timeout: Duration,
    },

    /// An externally supplied cancellation token was triggered before the
    /// request completed.
    #[error("request was aborted")]
    Aborted,

    /// The underlying transport failed before any HTTP response was obtained
    /// (DNS, connection refused, TLS failure, ...).
    #[error("network error while {context}: {source}")]
    Network {
        /// What the client was doing when the transport failed.
        context: &'static str,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A successful response body could not be decoded into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Return the API error payload if this is an [`Error::Api`].
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }
}

/// A non-2xx response from the server, with enough structure for the caller
/// to make a retry or surface decision.
#[derive(Debug, Error)]
#[error("API error (status {status}) on {method} {path}: {message}")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Request method.
    pub method: Method,
    /// Request path (relative, as passed to the executor).
    pub path: String,
    /// Human-readable message extracted from the response body.
    pub message: String,
    /// Parsed response body: a JSON value, a string for plain-text bodies,
    /// or `None` when the body was empty.
    pub body: Option<Value>,
}

impl ApiError {
    /// Build an API error from a parsed response body. The message prefers a
    /// string `message` field, then a string `error` field, then the raw text
    /// body, falling back to `"HTTP {status} error"`.
    pub(crate) fn from_payload(
        status: u16,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| match b {
                Value::Object(map) => map
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| map.get("error").and_then(Value::as_str))
                    .map(str::to_string),
                Value::String(text) if !text.is_empty() => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_else(|| format!("HTTP {status} error"));

        Self {
            status,
            method,
            path,
            message,
            body,
        }
    }

    /// The status is in the 400-499 range.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// The status is 500 or above.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// The status is exactly 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// The status is exactly 401.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// The status is exactly 403.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// The status is exactly 400.
    pub fn is_validation_error(&self) -> bool {
        self.status == 400
    }

    /// The status is exactly 409.
    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
