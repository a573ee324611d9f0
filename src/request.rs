//! Per-request building blocks: query strings and call-level overrides.

use std::fmt::Display;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// An ordered set of query parameters.
///
/// Parameters are emitted in insertion order. `push_opt` with `None` omits
/// the key entirely, so absent filters never appear in the query string.
/// Booleans encode as `true`/`false`, numbers in their decimal form, and
/// values are percent-encoded.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    #[must_use]
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter if the value is present; skip the key otherwise.
    #[must_use]
    pub fn push_opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode as `key=value&...` without a leading `?`.
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Per-call overrides accepted by every resource method.
///
/// # Example
///
/// ```no_run
/// use n8n_client::RequestOptions;
/// use std::time::Duration;
///
/// let opts = RequestOptions::new()
///     .timeout(Duration::from_secs(5))
///     .header("X-Request-Id", "abc-123");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers for this call; win over default headers on conflict.
    pub headers: Vec<(String, String)>,
    /// Timeout override for this call. `Some(Duration::ZERO)` disables the
    /// timeout entirely; `None` falls back to the client default.
    pub timeout: Option<Duration>,
    /// External cancellation handle. Triggering it surfaces [`Error::Aborted`].
    ///
    /// [`Error::Aborted`]: crate::Error::Aborted
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to this call.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Override the timeout for this call only.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach an external cancellation token. The token stays owned by the
    /// caller; the client only observes it.
    #[must_use]
    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_preserves_insertion_order() {
        let q = Query::new().push("b", 2).push("a", 1);
        assert_eq!(q.encode(), "b=2&a=1");
    }

    #[test]
    fn query_skips_absent_values() {
        let q = Query::new()
            .push("foo", "a")
            .push_opt("bar", None::<&str>)
            .push("baz", 5)
            .push("flag", true);
        let encoded = q.encode();
        assert_eq!(encoded, "foo=a&baz=5&flag=true");
        assert!(!encoded.contains("bar"));
    }

    #[test]
    fn query_percent_encodes_values() {
        let q = Query::new().push("name", "My Workflow/2");
        assert_eq!(q.encode(), "name=My%20Workflow%2F2");
    }

    #[test]
    fn empty_query_encodes_to_empty_string() {
        let q = Query::new().push_opt("cursor", None::<String>);
        assert!(q.is_empty());
        assert_eq!(q.encode(), "");
    }
}
