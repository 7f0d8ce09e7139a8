//! Credential error types.

use thiserror::Error;

/// Errors that can occur while resolving credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Required credentials are missing.
    #[error("Missing credentials: {message}")]
    Missing {
        /// Details about which credentials are missing.
        message: String,
    },

    /// Credentials are invalid or malformed.
    #[error("Invalid credentials: {message}")]
    Invalid {
        /// Details about why the credentials are invalid.
        message: String,
    },
}
