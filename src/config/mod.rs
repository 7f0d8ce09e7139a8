//! Configuration module for the SES client.
//!
//! A [`SesConfig`] is resolved once at startup, either through
//! [`SesConfig::builder`] or [`SesConfig::from_env`], and passed explicitly to
//! every [`SesClient`](crate::SesClient). It holds:
//!
//! - Region and endpoint URL
//! - Credentials
//! - The request signing scheme
//! - Timeouts for the default transport
//! - An optional user agent

use std::time::Duration;
use url::Url;

pub mod error;

pub use error::ConfigError;

use crate::credentials::{env::load_credentials, AwsCredentials};

/// Environment variable holding the region.
pub const AWS_REGION: &str = "AWS_REGION";
/// Fallback environment variable for the region.
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
/// Environment variable holding a custom SES endpoint URL.
pub const AWS_SES_ENDPOINT: &str = "AWS_SES_ENDPOINT";

/// Request authentication scheme.
///
/// The two schemes are not interchangeable on the wire; pick the one the
/// target endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningScheme {
    /// AWS Signature Version 4, scoped to date, region and service.
    #[default]
    V4,
    /// Legacy `AWS3-HTTPS` scheme: an HMAC-SHA256 over the `Date` header.
    V3,
}

/// Configuration for the SES client.
#[derive(Debug, Clone)]
pub struct SesConfig {
    /// AWS region (e.g., "us-east-1").
    pub region: String,

    /// Endpoint URL requests are posted to.
    pub endpoint: Url,

    /// Credentials used for signing and the `AWSAccessKeyId` form field.
    pub credentials: AwsCredentials,

    /// Signing scheme.
    pub signing_scheme: SigningScheme,

    /// Timeout for the entire request (default transport only).
    pub timeout: Duration,

    /// Timeout for establishing connections (default transport only).
    pub connect_timeout: Duration,

    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl SesConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_query::config::SesConfig;
    ///
    /// let config = SesConfig::builder()
    ///     .region("us-east-1")
    ///     .credentials("access_key", "secret_key")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.endpoint.as_str(), "https://email.us-east-1.amazonaws.com/");
    /// ```
    pub fn builder() -> SesConfigBuilder {
        SesConfigBuilder::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads:
    /// - `AWS_REGION` or `AWS_DEFAULT_REGION` for the region
    /// - `AWS_SES_ENDPOINT` for an optional custom endpoint
    /// - the credential variables listed in [`crate::credentials::env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create a configuration through a variable lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let region = lookup(AWS_REGION)
            .or_else(|| lookup(AWS_DEFAULT_REGION))
            .ok_or_else(|| ConfigError::Environment {
                message: format!("{} or {} must be set", AWS_REGION, AWS_DEFAULT_REGION),
            })?;

        let credentials = load_credentials(&lookup)?;

        let mut builder = Self::builder().region(region).with_credentials(credentials);
        if let Some(endpoint) = lookup(AWS_SES_ENDPOINT) {
            builder = builder.endpoint(endpoint);
        }

        builder.build()
    }

    /// Host (and port, when not the scheme default) of the endpoint.
    pub fn host(&self) -> Result<String, ConfigError> {
        host_of(&self.endpoint)
    }
}

fn host_of(url: &Url) -> Result<String, ConfigError> {
    let host = url.host_str().ok_or_else(|| ConfigError::InvalidEndpoint {
        endpoint: url.to_string(),
        message: "endpoint URL has no host".to_string(),
    })?;

    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Builder for creating SES client configurations.
#[derive(Debug, Default)]
pub struct SesConfigBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    credentials: Option<AwsCredentials>,
    signing_scheme: Option<SigningScheme>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SesConfigBuilder {
    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL.
    ///
    /// When unset, `https://email.<region>.amazonaws.com` is used.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set static credentials (convenience method).
    pub fn credentials(self, access_key: &str, secret_key: &str) -> Self {
        self.with_credentials(AwsCredentials::new(access_key, secret_key))
    }

    /// Set pre-built credentials.
    pub fn with_credentials(mut self, credentials: AwsCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the signing scheme.
    pub fn signing_scheme(mut self, scheme: SigningScheme) -> Self {
        self.signing_scheme = Some(scheme);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingField` if the region or credentials are not set
    /// - `ConfigError::InvalidEndpoint` if the endpoint is not an absolute
    ///   `http`/`https` URL with a host
    /// - `ConfigError::Invalid` if the credentials are empty
    pub fn build(self) -> Result<SesConfig, ConfigError> {
        let region = self
            .region
            .filter(|r| !r.is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "region".to_string(),
            })?;

        let credentials = self.credentials.ok_or_else(|| ConfigError::MissingField {
            field: "credentials".to_string(),
        })?;

        credentials.validate().map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })?;

        let raw_endpoint = self
            .endpoint
            .unwrap_or_else(|| format!("https://email.{}.amazonaws.com", region));

        let endpoint = Url::parse(&raw_endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: raw_endpoint.clone(),
            message: e.to_string(),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: raw_endpoint,
                message: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }
        host_of(&endpoint)?;

        Ok(SesConfig {
            region,
            endpoint,
            credentials,
            signing_scheme: self.signing_scheme.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(10)),
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::CredentialError;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_builder_with_required_fields() {
        let config = SesConfig::builder()
            .region("us-east-1")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.signing_scheme, SigningScheme::V4);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_default_endpoint() {
        let config = SesConfig::builder()
            .region("eu-west-1")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.endpoint.as_str(), "https://email.eu-west-1.amazonaws.com/");
        assert_eq!(config.host().unwrap(), "email.eu-west-1.amazonaws.com");
    }

    #[test]
    fn test_custom_endpoint_with_port() {
        let config = SesConfig::builder()
            .region("us-east-1")
            .endpoint("http://localhost:4566")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.endpoint.as_str(), "http://localhost:4566/");
        assert_eq!(config.host().unwrap(), "localhost:4566");
    }

    #[test]
    fn test_builder_with_options() {
        let config = SesConfig::builder()
            .region("us-east-1")
            .credentials("access_key", "secret_key")
            .signing_scheme(SigningScheme::V3)
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.signing_scheme, SigningScheme::V3);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent.as_deref(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_missing_region() {
        let result = SesConfig::builder()
            .credentials("access_key", "secret_key")
            .build();

        match result.unwrap_err() {
            ConfigError::MissingField { field } => assert_eq!(field, "region"),
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_missing_credentials() {
        let result = SesConfig::builder().region("us-east-1").build();

        match result.unwrap_err() {
            ConfigError::MissingField { field } => assert_eq!(field, "credentials"),
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_empty_credentials() {
        let result = SesConfig::builder()
            .region("us-east-1")
            .credentials("", "secret_key")
            .build();

        assert!(matches!(result.unwrap_err(), ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_builder_malformed_endpoint() {
        for endpoint in ["not a url", "ftp://email.example.com", "email.example.com"] {
            let result = SesConfig::builder()
                .region("us-east-1")
                .endpoint(endpoint)
                .credentials("access_key", "secret_key")
                .build();

            assert!(
                matches!(result, Err(ConfigError::InvalidEndpoint { .. })),
                "{endpoint} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_lookup() {
        let config = SesConfig::from_lookup(lookup_from(&[
            (AWS_REGION, "us-west-2"),
            (AWS_SES_ENDPOINT, "https://email.us-west-2.amazonaws.com"),
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_KEY", "SECRET"),
        ]))
        .unwrap();

        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.credentials.access_key_id(), "AKID");
        assert_eq!(config.host().unwrap(), "email.us-west-2.amazonaws.com");
    }

    #[test]
    fn test_from_lookup_default_region_and_endpoint() {
        let config = SesConfig::from_lookup(lookup_from(&[
            (AWS_REGION, ""),
            (AWS_DEFAULT_REGION, "ap-south-1"),
            (AWS_SES_ENDPOINT, ""),
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "SECRET"),
        ]))
        .unwrap();

        assert_eq!(config.region, "ap-south-1");
        assert_eq!(config.endpoint.as_str(), "https://email.ap-south-1.amazonaws.com/");
    }

    #[test]
    fn test_from_lookup_missing_region() {
        let err = SesConfig::from_lookup(lookup_from(&[
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_KEY", "SECRET"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Environment { .. }));
    }

    #[test]
    fn test_from_lookup_missing_credentials() {
        let err = SesConfig::from_lookup(lookup_from(&[(AWS_REGION, "us-east-1")])).unwrap_err();

        match err {
            ConfigError::Credential(CredentialError::Missing { message }) => {
                assert!(message.contains("AWS_ACCESS_KEY_ID"))
            }
            other => panic!("Expected Credential error, got {other:?}"),
        }
    }
}
