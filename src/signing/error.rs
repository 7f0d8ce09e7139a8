//! Signing error types.

use thiserror::Error;

/// Errors that can occur while signing a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    /// A required header was missing from the request.
    ///
    /// ```
    /// use integrations_aws_ses_query::signing::SigningError;
    ///
    /// let error = SigningError::MissingHeader {
    ///     header: "host".to_string(),
    /// };
    /// assert_eq!(error.to_string(), "Missing required header: host");
    /// ```
    #[error("Missing required header: {header}")]
    MissingHeader {
        /// The name of the missing header.
        header: String,
    },

    /// A computed value cannot be carried in an HTTP header.
    #[error("Invalid value for header: {header}")]
    InvalidHeaderValue {
        /// The header that could not be set.
        header: String,
    },

    /// The signing operation failed.
    ///
    /// Catch-all for failures that don't fit the more specific variants,
    /// such as missing key material.
    #[error("Signing failed: {message}")]
    SigningFailed {
        /// Details about the signing failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_error() {
        let error = SigningError::MissingHeader {
            header: "x-amz-date".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required header: x-amz-date");
    }

    #[test]
    fn test_invalid_header_value_error() {
        let error = SigningError::InvalidHeaderValue {
            header: "x-amz-security-token".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for header: x-amz-security-token"
        );
    }

    #[test]
    fn test_signing_failed_error() {
        let error = SigningError::SigningFailed {
            message: "HMAC calculation failed".to_string(),
        };
        assert_eq!(error.to_string(), "Signing failed: HMAC calculation failed");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SigningError>();
    }
}
