//! SES client implementation.
//!
//! [`SesClient`] turns a [`SendIntent`] into one signed form POST, hands it to
//! the injected [`Transport`] and maps the answer:
//!
//! ```text
//! SendIntent ─▶ FormParams ─▶ signed HttpRequest ─▶ Transport ─▶ SesResult<String>
//! ```
//!
//! Each call is independent. The client holds only read-only configuration
//! and the transport, so it can be cloned and shared across tasks freely.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{EmailBuilder, SesClient, SesConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SesConfig::builder()
//!     .region("us-east-1")
//!     .credentials("AKID", "SECRET")
//!     .build()?;
//! let client = SesClient::new(config)?;
//!
//! let intent = EmailBuilder::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Hello")
//!     .text("Email body")
//!     .build()?;
//!
//! let response = client.send(&intent).await?;
//! println!("{}", response);
//! # Ok(())
//! # }
//! ```

use crate::builders::encode_intent;
use crate::config::SesConfig;
use crate::error::{SesError, SesResult};
use crate::http::{HttpRequest, ReqwestTransport, Transport, FORM_CONTENT_TYPE};
use crate::signing::{format_http_date, sign_request};
use crate::types::{HtmlEmail, PlainTextEmail, RawEmail, SendIntent};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, DATE, HOST, USER_AGENT};
use http::Method;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Client for the SES query API.
#[derive(Clone)]
pub struct SesClient {
    config: Arc<SesConfig>,
    transport: Arc<dyn Transport>,
}

impl SesClient {
    /// Create a client that sends through a [`ReqwestTransport`] configured
    /// with the timeouts of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: SesConfig) -> SesResult<Self> {
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with an injected transport.
    pub fn with_transport(config: SesConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Create a client from environment variables.
    ///
    /// See [`SesConfig::from_env`] for the variables read.
    pub fn from_env() -> SesResult<Self> {
        Self::new(SesConfig::from_env()?)
    }

    /// Create a builder.
    pub fn builder() -> SesClientBuilder {
        SesClientBuilder::new()
    }

    /// The client configuration.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// Send a plain-text email.
    pub async fn send_email(&self, email: PlainTextEmail) -> SesResult<String> {
        self.send(&SendIntent::PlainText(email)).await
    }

    /// Send an email with text and HTML bodies.
    pub async fn send_email_html(&self, email: HtmlEmail) -> SesResult<String> {
        self.send(&SendIntent::Html(email)).await
    }

    /// Send a complete MIME message.
    pub async fn send_raw_email(&self, data: impl Into<Vec<u8>>) -> SesResult<String> {
        self.send(&SendIntent::Raw(RawEmail::new(data))).await
    }

    /// Send an email and return the raw response body.
    ///
    /// # Errors
    ///
    /// - Construction errors ([`SesError::Configuration`], [`SesError::Signing`])
    ///   before anything is sent
    /// - [`SesError::Transport`] when the transport fails
    /// - [`SesError::Api`] for any status other than 200
    #[instrument(skip(self, intent), fields(action = intent.action()))]
    pub async fn send(&self, intent: &SendIntent) -> SesResult<String> {
        let request = self.prepare_request(intent, Utc::now())?;

        debug!(endpoint = %request.url, "Dispatching SES request");

        let response = self.transport.send(request).await?;
        let status = response.status;
        let body = response.body_text();

        if !response.is_ok() {
            warn!(
                status,
                request_id = response.request_id().unwrap_or_default(),
                "SES rejected request"
            );
            return Err(SesError::Api { status, body });
        }

        debug!(
            status,
            request_id = response.request_id().unwrap_or_default(),
            "SES accepted request"
        );
        Ok(body)
    }

    /// Build the signed request for `intent` without sending it.
    ///
    /// The result depends only on the intent, the configuration and
    /// `timestamp`.
    pub fn prepare_request(
        &self,
        intent: &SendIntent,
        timestamp: DateTime<Utc>,
    ) -> SesResult<HttpRequest> {
        let config = &self.config;
        let body = encode_intent(intent, config.credentials.access_key_id()).encode();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        headers.insert(DATE, header_value(DATE, &format_http_date(&timestamp))?);
        headers.insert(HOST, header_value(HOST, &config.host()?)?);
        if let Some(user_agent) = &config.user_agent {
            headers.insert(USER_AGENT, header_value(USER_AGENT, user_agent)?);
        }

        sign_request(
            config.signing_scheme,
            Method::POST.as_str(),
            &config.endpoint,
            &mut headers,
            body.as_bytes(),
            &config.credentials,
            &config.region,
            &timestamp,
        )?;

        Ok(HttpRequest {
            method: Method::POST,
            url: config.endpoint.clone(),
            headers,
            body: Bytes::from(body),
        })
    }
}

fn header_value(name: HeaderName, value: &str) -> SesResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| SesError::Configuration {
        message: format!("Invalid value for header '{}'", name),
        source: Some(Box::new(e)),
    })
}

impl std::fmt::Debug for SesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for creating SES clients.
///
/// ```rust
/// use std::sync::Arc;
/// use integrations_aws_ses_query::mocks::{MockTransport, TestFixtures};
/// use integrations_aws_ses_query::SesClient;
///
/// let client = SesClient::builder()
///     .config(TestFixtures::config()?)
///     .transport(Arc::new(MockTransport::new()))
///     .build()?;
/// assert_eq!(client.config().region, "us-east-1");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct SesClientBuilder {
    config: Option<SesConfig>,
    transport: Option<Arc<dyn Transport>>,
    from_env: bool,
}

impl SesClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the provided configuration.
    pub fn config(mut self, config: SesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from environment variables when none is provided.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Send through the given transport instead of a [`ReqwestTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the SES client.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Configuration`] when no configuration is provided
    /// or it cannot be loaded.
    pub fn build(self) -> SesResult<SesClient> {
        let config = match self.config {
            Some(config) => config,
            None if self.from_env => SesConfig::from_env()?,
            None => {
                return Err(SesError::Configuration {
                    message: "No configuration provided. Use config() or from_env()".to_string(),
                    source: None,
                })
            }
        };

        match self.transport {
            Some(transport) => Ok(SesClient::with_transport(config, transport)),
            None => SesClient::new(config),
        }
    }
}
