//! Outgoing HTTP request.

use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

/// A fully prepared, signed request ready for a [`Transport`](super::Transport).
///
/// One-shot: it is consumed by [`Transport::send`](super::Transport::send).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Target URL.
    pub url: Url,
    /// Request headers, including the signature.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl HttpRequest {
    /// Create a request with no headers and an empty body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body as UTF-8 text (lossy).
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
