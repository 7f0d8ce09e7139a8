//! HTTP layer between the client and the network.
//!
//! ```text
//! SesClient ──HttpRequest──▶ Transport ──▶ network
//!           ◀─HttpResponse──
//! ```
//!
//! - [`HttpRequest`] / [`HttpResponse`]: plain, buffered request and response values
//! - [`Transport`]: the injectable send capability
//! - [`ReqwestTransport`]: the default transport

mod request;
mod response;
mod transport;

pub use request::HttpRequest;
pub use response::HttpResponse;
pub use transport::{ReqwestTransport, Transport};

/// Content type of every query API request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
