//! Encoding of send intents into query API form fields.

use crate::types::{FormParams, HtmlEmail, PlainTextEmail, RawEmail, SendIntent};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Field carrying the access key id alongside the signed request.
pub const ACCESS_KEY_ID_FIELD: &str = "AWSAccessKeyId";

/// Map a [`SendIntent`] to the form fields of its query API action.
///
/// Pure and deterministic. Inputs are not validated.
///
/// ```
/// use integrations_aws_ses_query::builders::encode_intent;
/// use integrations_aws_ses_query::types::{PlainTextEmail, SendIntent};
///
/// let intent = SendIntent::PlainText(PlainTextEmail {
///     from: "a@x.com".into(),
///     to: vec!["b@x.com".into()],
///     subject: "Hi".into(),
///     body: "Hello".into(),
///     ..Default::default()
/// });
///
/// let params = encode_intent(&intent, "AKID");
/// assert_eq!(params.get("Action"), Some("SendEmail"));
/// assert_eq!(params.get("Destination.ToAddresses.member.1"), Some("b@x.com"));
/// assert!(!params.contains_key("Destination.CcAddresses.member.1"));
/// ```
pub fn encode_intent(intent: &SendIntent, access_key_id: &str) -> FormParams {
    let mut params = FormParams::new();
    params.insert("Action", intent.action());

    match intent {
        SendIntent::PlainText(PlainTextEmail {
            from,
            to,
            cc,
            bcc,
            subject,
            body,
        }) => {
            insert_envelope(&mut params, from, to, cc, bcc);
            params.insert("Message.Subject.Data", subject.as_str());
            params.insert("Message.Body.Text.Data", body.as_str());
        }
        SendIntent::Html(HtmlEmail {
            from,
            to,
            cc,
            bcc,
            subject,
            text_body,
            html_body,
        }) => {
            insert_envelope(&mut params, from, to, cc, bcc);
            params.insert("Message.Subject.Data", subject.as_str());
            params.insert("Message.Body.Text.Data", text_body.as_str());
            params.insert("Message.Body.Html.Data", html_body.as_str());
        }
        SendIntent::Raw(RawEmail { data }) => {
            params.insert("RawMessage.Data", STANDARD.encode(data));
        }
    }

    params.insert(ACCESS_KEY_ID_FIELD, access_key_id);
    params
}

fn insert_envelope(
    params: &mut FormParams,
    from: &str,
    to: &[String],
    cc: &[String],
    bcc: &[String],
) {
    params.insert("Source", from);
    insert_recipients(params, "To", to);
    insert_recipients(params, "Cc", cc);
    insert_recipients(params, "Bcc", bcc);
}

// Indices are 1-based and local to each list.
fn insert_recipients(params: &mut FormParams, kind: &str, addresses: &[String]) {
    for (i, address) in addresses.iter().enumerate() {
        params.insert(
            format!("Destination.{}Addresses.member.{}", kind, i + 1),
            address.as_str(),
        );
    }
}
