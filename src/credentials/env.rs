//! Environment variable credential loading.
//!
//! The following variables are consulted:
//! - `AWS_ACCESS_KEY_ID`: the access key ID (required)
//! - `AWS_SECRET_KEY`, falling back to `AWS_SECRET_ACCESS_KEY`: the secret key (required)
//! - `AWS_SESSION_TOKEN`: optional session token for temporary credentials

use super::{AwsCredentials, CredentialError};

/// Environment variable holding the access key ID.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret key.
pub const AWS_SECRET_KEY: &str = "AWS_SECRET_KEY";
/// Standard AWS name for the secret key, used when `AWS_SECRET_KEY` is unset.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Environment variable holding an optional session token.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Resolve credentials through a variable lookup function.
///
/// `lookup` returns the value of a variable, or `None` when unset. Passing the
/// lookup in keeps resolution independent of the real process environment.
///
/// ```
/// use integrations_aws_ses_query::credentials::env::load_credentials;
///
/// let creds = load_credentials(|name| match name {
///     "AWS_ACCESS_KEY_ID" => Some("AKID".to_string()),
///     "AWS_SECRET_KEY" => Some("SECRET".to_string()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(creds.access_key_id(), "AKID");
/// ```
pub fn load_credentials<F>(lookup: F) -> Result<AwsCredentials, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    let access_key_id = lookup(AWS_ACCESS_KEY_ID).ok_or_else(|| CredentialError::Missing {
        message: format!("{} environment variable not set", AWS_ACCESS_KEY_ID),
    })?;

    if access_key_id.is_empty() {
        return Err(CredentialError::Invalid {
            message: format!("{} is empty", AWS_ACCESS_KEY_ID),
        });
    }

    let secret_access_key = lookup(AWS_SECRET_KEY)
        .or_else(|| lookup(AWS_SECRET_ACCESS_KEY))
        .ok_or_else(|| CredentialError::Missing {
            message: format!(
                "{} (or {}) environment variable not set",
                AWS_SECRET_KEY, AWS_SECRET_ACCESS_KEY
            ),
        })?;

    if secret_access_key.is_empty() {
        return Err(CredentialError::Invalid {
            message: format!("{} is empty", AWS_SECRET_KEY),
        });
    }

    let credentials = AwsCredentials::new(access_key_id, secret_access_key);

    // Session token is optional
    match lookup(AWS_SESSION_TOKEN).filter(|s| !s.is_empty()) {
        Some(token) => Ok(credentials.with_session_token(token)),
        None => Ok(credentials),
    }
}
