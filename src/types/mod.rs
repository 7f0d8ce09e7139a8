//! Request and message types.

mod email;
mod form;

pub use email::{HtmlEmail, PlainTextEmail, RawEmail, SendIntent};
pub use form::FormParams;
