//! Configuration error types for the SES client.

use thiserror::Error;

use crate::credentials::CredentialError;

/// Errors that can occur during configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration field is missing.
    #[error("Missing required configuration: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The endpoint URL is malformed or unusable.
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The endpoint as supplied.
        endpoint: String,
        /// Why it was rejected.
        message: String,
    },

    /// Invalid configuration value or combination.
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the configuration issue.
        message: String,
    },

    /// Credentials in the environment are missing or unusable.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Error reading from environment variables.
    #[error("Environment error: {message}")]
    Environment {
        /// Description of the environment error.
        message: String,
    },
}
