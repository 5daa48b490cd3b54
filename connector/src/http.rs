//! HTTP client collaborator seam.
//!
//! The connector never talks to the network directly; it hands
//! [`HttpRequest`]s to an [`HttpSend`] implementation and receives raw
//! status-and-body pairs back. Production code uses [`ReqwestClient`];
//! tests substitute a scripted implementation.

use async_trait::async_trait;
use thiserror::Error;

/// HTTP method of a collaborator request. Only the verbs the remote API
/// needs are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// An HTTP GET.
    Get,
    /// An HTTP POST.
    Post,
}

/// A single outbound request handed to the collaborator.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method.
    pub method: Method,
    /// Fully-formed request URL.
    pub url: String,
    /// Header name/value pairs, sent as-is.
    pub headers: Vec<(String, String)>,
    /// Raw request body, if any.
    pub body: Option<String>,
}

/// A raw response: the transport succeeded, but the status may still be
/// non-2xx.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

impl HttpResponse {
    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failure, distinguishable from an application-level
/// non-2xx status (which arrives as a normal [`HttpResponse`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    /// Description of the underlying network failure.
    pub message: String,
}

/// Synchronous-contract HTTP collaborator: one request in, one raw response
/// out. No retries, no redirects policy, no body interpretation.
#[async_trait]
pub trait HttpSend: Send + Sync {
    /// Sends `request` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when the transport itself fails; a
    /// non-2xx status is a successful send.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production collaborator backed by [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a collaborator with reqwest's default connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpSend for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.inner.get(&request.url),
            Method::Post => self.inner.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| TransportError {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError {
            message: e.to_string(),
        })?;

        Ok(HttpResponse { status, body })
    }
}
