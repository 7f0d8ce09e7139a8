//! Legacy `AWS3-HTTPS` request signing.
//!
//! The signature is an HMAC-SHA256 over the value of the `Date` header, keyed
//! with the secret access key and base64-encoded. It is carried in the
//! `x-amzn-authorization` header.

use super::error::SigningError;
use super::{header_value, hmac_sha256};
use crate::credentials::AwsCredentials;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::HeaderMap;

/// Header carrying the V3 authorization value.
pub const AMZN_AUTHORIZATION: &str = "x-amzn-authorization";

/// Sign a request with the `AWS3-HTTPS` scheme.
///
/// The `date` header must already be present; its exact value is what gets
/// signed.
///
/// ```
/// use http::HeaderMap;
/// use integrations_aws_ses_query::credentials::AwsCredentials;
/// use integrations_aws_ses_query::signing::sign_request_v3;
///
/// let credentials = AwsCredentials::new("AKID", "SECRET");
/// let mut headers = HeaderMap::new();
/// headers.insert("date", "Fri, 15 Dec 2023 10:30:45 +0000".parse().unwrap());
///
/// sign_request_v3(&mut headers, &credentials).unwrap();
///
/// let auth = headers["x-amzn-authorization"].to_str().unwrap();
/// assert!(auth.starts_with("AWS3-HTTPS AWSAccessKeyId=AKID, Algorithm=HmacSHA256, Signature="));
/// ```
pub fn sign_request_v3(
    headers: &mut HeaderMap,
    credentials: &AwsCredentials,
) -> Result<(), SigningError> {
    if credentials.access_key_id().is_empty() {
        return Err(SigningError::SigningFailed {
            message: "Access key ID is required".to_string(),
        });
    }
    if credentials.secret_access_key().is_empty() {
        return Err(SigningError::SigningFailed {
            message: "Secret access key is required".to_string(),
        });
    }

    let date = headers
        .get(http::header::DATE)
        .ok_or_else(|| SigningError::MissingHeader {
            header: "date".to_string(),
        })?
        .as_bytes()
        .to_vec();

    let signature = STANDARD.encode(hmac_sha256(
        credentials.secret_access_key().as_bytes(),
        &date,
    )?);

    if let Some(token) = credentials.session_token() {
        headers.insert(
            "x-amz-security-token",
            header_value("x-amz-security-token", token)?,
        );
    }

    let authorization = format!(
        "AWS3-HTTPS AWSAccessKeyId={}, Algorithm=HmacSHA256, Signature={}",
        credentials.access_key_id(),
        signature
    );
    headers.insert(
        AMZN_AUTHORIZATION,
        header_value(AMZN_AUTHORIZATION, &authorization)?,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("date", "Fri, 15 Dec 2023 10:30:45 +0000".parse().unwrap());
        headers
    }

    #[test]
    fn test_sign_known_value() {
        let credentials = AwsCredentials::new("AKID", "SECRET");
        let mut headers = dated_headers();

        sign_request_v3(&mut headers, &credentials).unwrap();

        assert_eq!(
            headers[AMZN_AUTHORIZATION].to_str().unwrap(),
            "AWS3-HTTPS AWSAccessKeyId=AKID, Algorithm=HmacSHA256, \
             Signature=bHmeV2bKpDi0jamUPF2M9IhMkfgTGlZ5+uFoPYSbCRU="
        );
        assert!(!headers.contains_key("authorization"));
    }

    #[test]
    fn test_signature_follows_date() {
        let credentials = AwsCredentials::new("AKID", "SECRET");

        let mut first = dated_headers();
        sign_request_v3(&mut first, &credentials).unwrap();

        let mut second = HeaderMap::new();
        second.insert("date", "Fri, 15 Dec 2023 10:30:46 +0000".parse().unwrap());
        sign_request_v3(&mut second, &credentials).unwrap();

        assert_ne!(first[AMZN_AUTHORIZATION], second[AMZN_AUTHORIZATION]);
    }

    #[test]
    fn test_missing_date_header() {
        let credentials = AwsCredentials::new("AKID", "SECRET");
        let mut headers = HeaderMap::new();

        let err = sign_request_v3(&mut headers, &credentials).unwrap_err();
        assert_eq!(
            err,
            SigningError::MissingHeader {
                header: "date".to_string()
            }
        );
    }

    #[test]
    fn test_session_token_header() {
        let credentials = AwsCredentials::new("AKID", "SECRET").with_session_token("TOKEN");
        let mut headers = dated_headers();

        sign_request_v3(&mut headers, &credentials).unwrap();
        assert_eq!(headers["x-amz-security-token"], "TOKEN");
    }

    #[test]
    fn test_missing_secret() {
        let credentials = AwsCredentials::new("AKID", "");
        let mut headers = dated_headers();

        let err = sign_request_v3(&mut headers, &credentials).unwrap_err();
        assert!(matches!(err, SigningError::SigningFailed { .. }));
    }
}
