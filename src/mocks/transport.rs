//! Mock HTTP transport for testing.

use crate::error::{SesError, SesResult};
use crate::http::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// Mock HTTP response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl MockResponse {
    /// Create a successful response with empty body.
    pub fn ok() -> Self {
        Self::error(200, Bytes::new())
    }

    /// Create a successful response with body.
    pub fn ok_with_body(body: impl Into<Bytes>) -> Self {
        Self::error(200, body)
    }

    /// Create a response with any status.
    pub fn error(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header to the response.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    fn into_response(self) -> HttpResponse {
        let headers: HeaderMap = self
            .headers
            .iter()
            .filter_map(|(k, v)| {
                let name = HeaderName::from_bytes(k.as_bytes()).ok()?;
                let value = HeaderValue::from_str(v).ok()?;
                Some((name, value))
            })
            .collect();

        HttpResponse {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

/// Outcome of one mocked send.
#[derive(Debug, Clone)]
enum MockOutcome {
    Respond(MockResponse),
    Fail(String),
}

/// Mock HTTP transport for testing.
///
/// Records every request and answers from a FIFO queue of responses or
/// transport failures. With an empty queue it falls back to the default
/// response, or fails when there is none.
///
/// ```rust
/// use integrations_aws_ses_query::mocks::{MockResponse, MockTransport};
///
/// let transport = MockTransport::new();
/// transport.queue_response(MockResponse::ok_with_body("<SendEmailResponse/>"));
/// transport.queue_error("connection reset");
/// assert_eq!(transport.request_count(), 0);
/// ```
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<HttpRequest>>,
    default_response: Option<MockResponse>,
}

impl MockTransport {
    /// Create a new mock transport with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock transport with queued responses.
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        Self {
            outcomes: Mutex::new(responses.into_iter().map(MockOutcome::Respond).collect()),
            ..Self::default()
        }
    }

    /// Create a mock transport answering every request with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        Self {
            default_response: Some(response),
            ..Self::default()
        }
    }

    /// Queue a response to return.
    pub fn queue_response(&self, response: MockResponse) {
        lock(&self.outcomes).push_back(MockOutcome::Respond(response));
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, message: impl Into<String>) {
        lock(&self.outcomes).push_back(MockOutcome::Fail(message.into()));
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Get the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Get the last request made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }
}

// A panicking test thread must not hide the recorded state from others.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse> {
        lock(&self.requests).push(request);

        let outcome = lock(&self.outcomes)
            .pop_front()
            .or_else(|| self.default_response.clone().map(MockOutcome::Respond));

        match outcome {
            Some(MockOutcome::Respond(mock)) => Ok(mock.into_response()),
            Some(MockOutcome::Fail(message)) => Err(SesError::Transport {
                message,
                source: None,
            }),
            None => Err(SesError::Transport {
                message: "No mock response available".to_string(),
                source: None,
            }),
        }
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("queued_outcomes", &lock(&self.outcomes).len())
            .field("recorded_requests", &lock(&self.requests).len())
            .finish()
    }
}
