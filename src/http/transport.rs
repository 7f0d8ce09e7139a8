//! Transport layer abstraction for HTTP communication.
//!
//! The client hands a signed [`HttpRequest`] to a [`Transport`] and gets back
//! a buffered [`HttpResponse`]. Timeouts, TLS, pooling and cancellation are
//! the transport's concern. The default implementation uses reqwest; tests
//! use [`MockTransport`](crate::mocks::MockTransport).

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

use super::{HttpRequest, HttpResponse};
use crate::config::SesConfig;
use crate::error::{SesError, SesResult};

/// Trait for HTTP transport implementations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Transport`] if the request cannot be delivered or
    /// no response is obtained. Non-200 statuses are not errors at this level.
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse>;
}

/// Reqwest-based HTTP transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request and connect timeouts.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use integrations_aws_ses_query::http::ReqwestTransport;
    ///
    /// let transport = ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10))?;
    /// # Ok::<(), integrations_aws_ses_query::SesError>(())
    /// ```
    pub fn new(timeout: Duration, connect_timeout: Duration) -> SesResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| SesError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }

    /// Create a transport using the timeouts of a configuration.
    pub fn from_config(config: &SesConfig) -> SesResult<Self> {
        Self::new(config.timeout, config.connect_timeout)
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();

        let body = match response.bytes().await {
            Ok(body) => body,
            // The status alone is enough to report a rejection.
            Err(e) if status != 200 => {
                warn!(status, error = %e, "Failed to read error response body");
                Bytes::new()
            }
            Err(e) => {
                return Err(SesError::transport(
                    format!("Failed to read response body: {}", e),
                    e,
                ))
            }
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}
