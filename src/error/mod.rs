//! Error types for the SES query-API client.
//!
//! Every failure surfaced by [`SesClient`](crate::SesClient) is a [`SesError`].
//! The variants fall into three classes:
//!
//! - **Construction errors** ([`SesError::Configuration`], [`SesError::Credential`],
//!   [`SesError::Signing`], [`SesError::Validation`]) are raised before any network
//!   activity takes place.
//! - **Transport errors** ([`SesError::Transport`]) come from the injected transport
//!   and are passed through unchanged.
//! - **API errors** ([`SesError::Api`]) carry the HTTP status and the verbatim
//!   response body of any non-200 answer from SES.
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_query::error::SesError;
//!
//! fn describe(error: &SesError) -> String {
//!     match error.status_code() {
//!         Some(status) => format!("rejected with {status}: {}", error.response_body().unwrap_or("")),
//!         None => error.to_string(),
//!     }
//! }
//!
//! let error = SesError::Api {
//!     status: 400,
//!     body: "<ErrorResponse/>".to_string(),
//! };
//! assert_eq!(describe(&error), "rejected with 400: <ErrorResponse/>");
//! ```

use thiserror::Error;

use crate::builders::BuilderError;
use crate::config::ConfigError;
use crate::credentials::CredentialError;
use crate::signing::SigningError;

/// Result type alias for SES operations.
pub type SesResult<T> = Result<T, SesError>;

/// Top-level error type for the SES query-API client.
#[derive(Debug, Error)]
pub enum SesError {
    /// The client or request could not be constructed.
    ///
    /// Raised for malformed endpoint URLs, missing configuration values and
    /// header values that cannot be represented on the wire.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Credentials could not be resolved.
    ///
    /// Produced when [`SesConfig::from_env`](crate::SesConfig::from_env) finds
    /// no usable credential variables, or when a [`CredentialError`] is
    /// propagated with `?`.
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the credential error.
        message: String,
    },

    /// Request signing failed.
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error.
        message: String,
    },

    /// A send intent was rejected by [`EmailBuilder`](crate::builders::EmailBuilder).
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation error.
        message: String,
        /// Optional field name that failed validation.
        field: Option<String>,
    },

    /// The transport failed to deliver the request or obtain a response.
    ///
    /// Connection, DNS and TLS failures all land here. No retry is attempted.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// SES answered with a status other than 200.
    ///
    /// The body is kept verbatim and never interpreted.
    #[error("SES API error (status {status}): {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl SesError {
    /// Create a transport error from any error value.
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SesError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the HTTP status code for API errors.
    ///
    /// ```rust
    /// use integrations_aws_ses_query::error::SesError;
    ///
    /// let error = SesError::Api { status: 403, body: String::new() };
    /// assert_eq!(error.status_code(), Some(403));
    /// ```
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SesError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body for API errors.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            SesError::Api { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Returns true if the error was raised before any network activity.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            SesError::Configuration { .. }
                | SesError::Credential { .. }
                | SesError::Signing { .. }
                | SesError::Validation { .. }
        )
    }

    /// Returns true if the error originated in the transport.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, SesError::Transport { .. })
    }
}

impl From<ConfigError> for SesError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Credential(err) => err.into(),
            err => SesError::Configuration {
                message: err.to_string(),
                source: Some(Box::new(err)),
            },
        }
    }
}

impl From<CredentialError> for SesError {
    fn from(err: CredentialError) -> Self {
        SesError::Credential {
            message: err.to_string(),
        }
    }
}

impl From<SigningError> for SesError {
    fn from(err: SigningError) -> Self {
        SesError::Signing {
            message: err.to_string(),
        }
    }
}

impl From<BuilderError> for SesError {
    fn from(err: BuilderError) -> Self {
        let field = match &err {
            BuilderError::MissingField { field } | BuilderError::InvalidValue { field, .. } => {
                Some(field.clone())
            }
        };
        SesError::Validation {
            message: err.to_string(),
            field,
        }
    }
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };

        SesError::Transport {
            message,
            source: Some(Box::new(err)),
        }
    }
}
