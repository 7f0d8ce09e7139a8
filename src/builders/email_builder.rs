//! Fluent construction of send intents.

use crate::builders::BuilderError;
use crate::types::{HtmlEmail, PlainTextEmail, RawEmail, SendIntent};

/// Builder for a [`SendIntent`] with a fluent API.
///
/// Produces [`SendIntent::PlainText`] when only a text body is given and
/// [`SendIntent::Html`] as soon as an HTML body is set.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::builders::EmailBuilder;
/// use integrations_aws_ses_query::types::SendIntent;
///
/// let intent = EmailBuilder::new()
///     .from("sender@example.com")
///     .to("recipient1@example.com")
///     .to("recipient2@example.com")
///     .cc("cc@example.com")
///     .subject("Meeting Invitation")
///     .text("You're invited")
///     .html("<p>You're invited</p>")
///     .build()?;
///
/// assert!(matches!(intent, SendIntent::Html(_)));
/// # Ok::<(), integrations_aws_ses_query::builders::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct EmailBuilder {
    from: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    subject: Option<String>,
    text_body: Option<String>,
    html_body: Option<String>,
}

impl EmailBuilder {
    /// Create a new email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a raw intent from a complete MIME document.
    ///
    /// The bytes are sent as-is; nothing is validated.
    ///
    /// ```rust
    /// use integrations_aws_ses_query::builders::EmailBuilder;
    ///
    /// let intent = EmailBuilder::raw(b"From: a@x.com\r\n\r\nhi".to_vec());
    /// assert_eq!(intent.action(), "SendRawEmail");
    /// ```
    pub fn raw(data: impl Into<Vec<u8>>) -> SendIntent {
        SendIntent::Raw(RawEmail::new(data))
    }

    /// Set the sender address. Required.
    pub fn from(mut self, email: impl Into<String>) -> Self {
        self.from = Some(email.into());
        self
    }

    /// Add a "To" recipient.
    ///
    /// Recipients keep the order in which they are added.
    pub fn to(mut self, email: impl Into<String>) -> Self {
        self.to.push(email.into());
        self
    }

    /// Add a "CC" recipient.
    pub fn cc(mut self, email: impl Into<String>) -> Self {
        self.cc.push(email.into());
        self
    }

    /// Add a "BCC" recipient.
    pub fn bcc(mut self, email: impl Into<String>) -> Self {
        self.bcc.push(email.into());
        self
    }

    /// Set the subject line. Required.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Build the [`SendIntent`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if `from` is not set
    /// - [`BuilderError::InvalidValue`] if `from` is blank
    /// - [`BuilderError::MissingField`] if no recipients are specified
    /// - [`BuilderError::MissingField`] if `subject` is not set
    /// - [`BuilderError::MissingField`] if neither text nor HTML body is set
    pub fn build(self) -> Result<SendIntent, BuilderError> {
        let from = self.from.ok_or_else(|| BuilderError::missing_field("from"))?;
        if from.trim().is_empty() {
            return Err(BuilderError::invalid_value(
                "from",
                "sender address must not be empty",
            ));
        }

        if self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty() {
            return Err(BuilderError::missing_field("recipients"));
        }

        let subject = self
            .subject
            .ok_or_else(|| BuilderError::missing_field("subject"))?;

        match (self.text_body, self.html_body) {
            (None, None) => Err(BuilderError::missing_field("body (text or html)")),
            (Some(body), None) => Ok(SendIntent::PlainText(PlainTextEmail {
                from,
                to: self.to,
                cc: self.cc,
                bcc: self.bcc,
                subject,
                body,
            })),
            (text_body, Some(html_body)) => Ok(SendIntent::Html(HtmlEmail {
                from,
                to: self.to,
                cc: self.cc,
                bcc: self.bcc,
                subject,
                text_body: text_body.unwrap_or_default(),
                html_body,
            })),
        }
    }
}
