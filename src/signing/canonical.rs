//! Canonical request building for AWS Signature V4.
//!
//! Canonical requests are a standardized representation of HTTP requests used
//! as the input of the V4 signature.

use http::HeaderMap;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;
use url::Url;

/// Characters that should NOT be percent-encoded in URI paths.
///
/// RFC 3986 unreserved characters plus the path separator.
const URI_PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Characters that should NOT be percent-encoded in query strings.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// URI-encode a string according to AWS signature requirements.
///
/// All characters except A-Z, a-z, 0-9, '-', '_', '.', and '~' are
/// percent-encoded. The forward slash is encoded only if `encode_slash` is true.
/// Spaces become `%20`, never `+`.
///
/// # Examples
///
/// ```
/// use integrations_aws_ses_query::signing::uri_encode;
///
/// assert_eq!(uri_encode("/my-path/file.txt", false), "/my-path/file.txt");
/// assert_eq!(uri_encode("hello world", false), "hello%20world");
/// assert_eq!(uri_encode("value/with/slash", true), "value%2Fwith%2Fslash");
/// ```
pub fn uri_encode(input: &str, encode_slash: bool) -> String {
    if encode_slash {
        utf8_percent_encode(input, QUERY_SET).to_string()
    } else {
        utf8_percent_encode(input, URI_PATH_SET).to_string()
    }
}

/// Normalize a URI path by removing redundant slashes and resolving relative segments.
///
/// # Examples
///
/// ```
/// use integrations_aws_ses_query::signing::normalize_uri_path;
///
/// assert_eq!(normalize_uri_path("/foo//bar"), "/foo/bar");
/// assert_eq!(normalize_uri_path("/foo/../bar"), "/bar");
/// assert_eq!(normalize_uri_path(""), "/");
/// ```
pub fn normalize_uri_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let has_trailing_slash = path.ends_with('/');

    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut result = String::from("/");
    result.push_str(&segments.join("/"));

    if has_trailing_slash && !result.ends_with('/') {
        result.push('/');
    }

    result
}

/// Canonical URI of a request URL.
///
/// The already-escaped URL path is decoded once, normalized, and re-encoded
/// with the AWS path rules so that it is never double-encoded.
pub fn canonical_uri(url: &Url) -> String {
    let decoded = percent_decode_str(url.path()).decode_utf8_lossy();
    uri_encode(&normalize_uri_path(&decoded), false)
}

/// Build a canonical query string from query parameters.
///
/// Names and values are URI-encoded, sorted by name then value, and joined
/// with `&`.
///
/// # Examples
///
/// ```
/// use integrations_aws_ses_query::signing::canonical_query_string;
///
/// let params = vec![
///     ("z".to_string(), "last".to_string()),
///     ("a".to_string(), "first".to_string()),
/// ];
/// assert_eq!(canonical_query_string(&params), "a=first&z=last");
/// ```
pub fn canonical_query_string(query_params: &[(String, String)]) -> String {
    let mut encoded_params: Vec<(String, String)> = query_params
        .iter()
        .map(|(key, value)| (uri_encode(key, true), uri_encode(value, true)))
        .collect();

    encoded_params.sort();

    encoded_params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build canonical headers string and signed headers string.
///
/// Only headers accepted by [`should_sign_header`] are included. Names are
/// lowercased, values trimmed with inner whitespace runs collapsed, and
/// entries sorted by name. Returns `(canonical_headers, signed_headers)`.
///
/// # Examples
///
/// ```
/// use http::HeaderMap;
/// use integrations_aws_ses_query::signing::canonical_headers;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("host", "email.us-east-1.amazonaws.com".parse().unwrap());
/// headers.insert("x-amz-date", "20231215T103045Z".parse().unwrap());
/// headers.insert("user-agent", "test".parse().unwrap());
///
/// let (canonical, signed) = canonical_headers(&headers);
/// assert_eq!(
///     canonical,
///     "host:email.us-east-1.amazonaws.com\nx-amz-date:20231215T103045Z\n"
/// );
/// assert_eq!(signed, "host;x-amz-date");
/// ```
pub fn canonical_headers(headers: &HeaderMap) -> (String, String) {
    let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (name, value) in headers {
        // HeaderName is always lowercase
        let name = name.as_str();
        if !should_sign_header(name) {
            continue;
        }

        let value_str = String::from_utf8_lossy(value.as_bytes());
        let trimmed = value_str.split_whitespace().collect::<Vec<_>>().join(" ");

        header_map.entry(name.to_string()).or_default().push(trimmed);
    }

    let canonical_headers_str = header_map
        .iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect::<String>();

    let signed_headers_str = header_map
        .keys()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(";");

    (canonical_headers_str, signed_headers_str)
}

/// Determine if a header should be included in the signature.
///
/// Signed headers: `host`, `date`, `content-type`, `content-md5` and any
/// `x-amz-*` header.
///
/// # Examples
///
/// ```
/// use integrations_aws_ses_query::signing::should_sign_header;
///
/// assert!(should_sign_header("host"));
/// assert!(should_sign_header("Date"));
/// assert!(should_sign_header("x-amz-date"));
/// assert!(!should_sign_header("user-agent"));
/// ```
pub fn should_sign_header(header_name: &str) -> bool {
    let name_lower = header_name.to_ascii_lowercase();

    matches!(
        name_lower.as_str(),
        "host" | "date" | "content-type" | "content-md5"
    ) || name_lower.starts_with("x-amz-")
}
