//! Send intents for the query API.

use serde::{Deserialize, Serialize};

/// A plain-text email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTextEmail {
    /// Sender address.
    pub from: String,
    /// "To" recipients, in the order they are encoded.
    #[serde(default)]
    pub to: Vec<String>,
    /// "CC" recipients.
    #[serde(default)]
    pub cc: Vec<String>,
    /// "BCC" recipients.
    #[serde(default)]
    pub bcc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Text body.
    pub body: String,
}

/// An email with both a text and an HTML body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlEmail {
    /// Sender address.
    pub from: String,
    /// "To" recipients, in the order they are encoded.
    #[serde(default)]
    pub to: Vec<String>,
    /// "CC" recipients.
    #[serde(default)]
    pub cc: Vec<String>,
    /// "BCC" recipients.
    #[serde(default)]
    pub bcc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Text alternative body.
    pub text_body: String,
    /// HTML body.
    pub html_body: String,
}

/// A pre-built MIME message, sent as opaque bytes.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmail {
    /// The complete MIME document.
    pub data: Vec<u8>,
}

impl RawEmail {
    /// Wrap raw message bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl std::fmt::Debug for RawEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawEmail")
            .field("len", &self.data.len())
            .finish()
    }
}

/// A logical request to send one email.
///
/// ```
/// use integrations_aws_ses_query::types::{PlainTextEmail, SendIntent};
///
/// let intent = SendIntent::from(PlainTextEmail {
///     from: "a@x.com".into(),
///     to: vec!["b@x.com".into()],
///     subject: "Hi".into(),
///     body: "Hello".into(),
///     ..Default::default()
/// });
/// assert_eq!(intent.action(), "SendEmail");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SendIntent {
    /// Text-only message.
    PlainText(PlainTextEmail),
    /// Text and HTML message.
    Html(HtmlEmail),
    /// Raw MIME message.
    Raw(RawEmail),
}

impl SendIntent {
    /// Query API action name for this intent.
    pub fn action(&self) -> &'static str {
        match self {
            SendIntent::PlainText(_) | SendIntent::Html(_) => "SendEmail",
            SendIntent::Raw(_) => "SendRawEmail",
        }
    }
}

impl From<PlainTextEmail> for SendIntent {
    fn from(email: PlainTextEmail) -> Self {
        SendIntent::PlainText(email)
    }
}

impl From<HtmlEmail> for SendIntent {
    fn from(email: HtmlEmail) -> Self {
        SendIntent::Html(email)
    }
}

impl From<RawEmail> for SendIntent {
    fn from(email: RawEmail) -> Self {
        SendIntent::Raw(email)
    }
}
