//! Core client and request executor.
//!
//! The executor performs exactly one HTTP round trip per call, arbitrating
//! between the effective timeout and an optional external cancellation token,
//! then classifies the outcome into the error taxonomy in [`crate::error`].

use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use crate::request::{Query, RequestOptions};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Header carrying the static API key.
const API_KEY_HEADER: &str = "x-n8n-api-key";

/// A client for the n8n REST API.
///
/// Cheap to clone; all configuration is immutable after construction and the
/// underlying connection pool is shared between clones. Concurrent calls on
/// one client are fully independent: each call owns its own timer and
/// cancellation wiring.
///
/// # Example
///
/// ```no_run
/// use n8n_client::{Client, ClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ClientConfig::new("https://n8n.example.com", "my-api-key"))?;
///
/// let page = client.list_workflows(Default::default(), None).await?;
/// for workflow in page.items {
///     println!("{}: {}", workflow.id, workflow.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: HttpClient,
}

/// Parsed response body, before decoding into a caller type.
#[derive(Debug, Clone)]
pub(crate) enum Payload {
    /// 204 or an empty body.
    Empty,
    /// Body declared and parsed as JSON.
    Json(Value),
    /// Opaque non-JSON body.
    Text(String),
}

impl Payload {
    fn into_value(self) -> Value {
        match self {
            Payload::Empty => Value::Null,
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }

    fn into_body(self) -> Option<Value> {
        match self {
            Payload::Empty => None,
            Payload::Json(value) => Some(value),
            Payload::Text(text) => Some(Value::String(text)),
        }
    }
}

impl Client {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL or API key is empty, the API
    /// key is not a valid header value, or the HTTP client cannot be built.
    /// No network activity happens here.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut config = config;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::Config(format!("API key is not a valid header value: {e}")))?;

        let http = HttpClient::builder()
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Build the full request URL from the resource path and query.
    fn url(&self, path: &str, query: &Query) -> String {
        let mut url = format!(
            "{}/api/{}{}",
            self.config.base_url, self.config.api_version, path
        );
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.encode());
        }
        url
    }

    /// Resolve the timeout actually applied to a call: per-call override if
    /// present, else the client default. Zero means "no timeout".
    fn effective_timeout(&self, opts: Option<&RequestOptions>) -> Option<Duration> {
        let timeout = match opts.and_then(|o| o.timeout) {
            Some(t) => Some(t),
            None => self.config.timeout,
        };
        timeout.filter(|t| !t.is_zero())
    }

    /// Assemble request headers in override order: content type, API key,
    /// default headers, per-call headers. Later layers win on collision.
    fn build_headers(&self, opts: Option<&RequestOptions>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let api_key = HeaderValue::from_str(&self.config.api_key)
            .map_err(|e| Error::Config(format!("API key is not a valid header value: {e}")))?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        for (name, value) in &self.config.default_headers {
            insert_header(&mut headers, name, value)?;
        }
        if let Some(opts) = opts {
            for (name, value) in &opts.headers {
                insert_header(&mut headers, name, value)?;
            }
        }
        Ok(headers)
    }

    /// Perform one HTTP round trip.
    ///
    /// Two cancellation sources race against the in-flight request: the
    /// timeout timer and the caller's token. Terminal states are completed,
    /// timed-out, and aborted. Tie-break: when the timer fires, the external
    /// token's state is re-checked, and a triggered token classifies the
    /// failure as [`Error::Aborted`] regardless of which waker ran first.
    /// Dropping the select arms cancels the timer and the request on every
    /// exit path.
    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &Query,
        opts: Option<&RequestOptions>,
    ) -> Result<Payload>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query);
        let effective_timeout = self.effective_timeout(opts);
        let headers = self.build_headers(opts)?;

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(method = %method, url = %url, "dispatching request");

        let cancel = opts.and_then(|o| o.cancel.clone());

        let round_trip = async {
            let response = request.send().await.map_err(|e| Error::Network {
                context: "sending request",
                source: e,
            })?;

            let status = response.status();
            let json_body = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|ct| {
                    let ct = ct.to_ascii_lowercase();
                    ct.contains("application/json") || ct.contains("+json")
                })
                .unwrap_or(false);

            debug!(status = status.as_u16(), "response received");

            if status == StatusCode::NO_CONTENT {
                return Ok(Payload::Empty);
            }

            let text = response.text().await.map_err(|e| Error::Network {
                context: "reading response body",
                source: e,
            })?;

            let payload = if text.is_empty() {
                Payload::Empty
            } else if json_body {
                match serde_json::from_str::<Value>(&text) {
                    Ok(value) => Payload::Json(value),
                    // Body that does not honor its declared content type is
                    // kept as opaque text.
                    Err(_) => Payload::Text(text),
                }
            } else {
                Payload::Text(text)
            };

            if !status.is_success() {
                return Err(Error::Api(ApiError::from_payload(
                    status.as_u16(),
                    method,
                    path.to_string(),
                    payload.into_body(),
                )));
            }
            Ok(payload)
        };

        let timed_out = async {
            match effective_timeout {
                Some(t) => {
                    tokio::time::sleep(t).await;
                    t
                }
                None => std::future::pending::<Duration>().await,
            }
        };

        let externally_cancelled = async {
            match cancel.as_ref() {
                Some(token) => token.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = round_trip => result,
            timeout = timed_out => {
                // External cancellation is caller intent and must not be
                // mistaken for a server-side timeout.
                if cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
                    Err(Error::Aborted)
                } else {
                    Err(Error::Timeout { timeout })
                }
            }
            _ = externally_cancelled => Err(Error::Aborted),
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query,
        opts: Option<RequestOptions>,
    ) -> Result<T> {
        let payload = self
            .execute(Method::GET, path, None::<&()>, &query, opts.as_ref())
            .await?;
        decode(payload)
    }

    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        opts: Option<RequestOptions>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = self
            .execute(Method::POST, path, Some(body), &Query::new(), opts.as_ref())
            .await?;
        decode(payload)
    }

    pub(crate) async fn put_json<B, T>(
        &self,
        path: &str,
        body: &B,
        opts: Option<RequestOptions>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = self
            .execute(Method::PUT, path, Some(body), &Query::new(), opts.as_ref())
            .await?;
        decode(payload)
    }

    /// POST where the response body, if any, is discarded.
    pub(crate) async fn post_empty<B>(
        &self,
        path: &str,
        body: &B,
        opts: Option<RequestOptions>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body), &Query::new(), opts.as_ref())
            .await?;
        Ok(())
    }

    /// PUT where the response body, if any, is discarded.
    pub(crate) async fn put_empty<B>(
        &self,
        path: &str,
        body: &B,
        opts: Option<RequestOptions>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, path, Some(body), &Query::new(), opts.as_ref())
            .await?;
        Ok(())
    }

    /// PATCH where the response body, if any, is discarded.
    pub(crate) async fn patch_empty<B>(
        &self,
        path: &str,
        body: &B,
        opts: Option<RequestOptions>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, path, Some(body), &Query::new(), opts.as_ref())
            .await?;
        Ok(())
    }

    /// DELETE returning the deleted entity.
    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: Option<RequestOptions>,
    ) -> Result<T> {
        let payload = self
            .execute(Method::DELETE, path, None::<&()>, &Query::new(), opts.as_ref())
            .await?;
        decode(payload)
    }

    /// DELETE where the response body, if any, is discarded.
    pub(crate) async fn delete_empty(
        &self,
        path: &str,
        opts: Option<RequestOptions>,
    ) -> Result<()> {
        self.execute(Method::DELETE, path, None::<&()>, &Query::new(), opts.as_ref())
            .await?;
        Ok(())
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let header_name = HeaderName::try_from(name)
        .map_err(|e| Error::Config(format!("invalid header name {name:?}: {e}")))?;
    let header_value = HeaderValue::try_from(value)
        .map_err(|e| Error::Config(format!("invalid value for header {name:?}: {e}")))?;
    headers.insert(header_name, header_value);
    Ok(())
}

/// Decode a payload into the caller's type. `Empty` decodes as JSON null, so
/// unit targets succeed and value targets surface a decode error.
fn decode<T: DeserializeOwned>(payload: Payload) -> Result<T> {
    serde_json::from_value(payload.into_value()).map_err(Error::Decode)
}
