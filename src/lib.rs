//! AWS SES query API client.
//!
//! Sends plain-text, HTML and raw MIME email through the SES action-based
//! query API (`SendEmail` / `SendRawEmail`) as signed
//! `application/x-www-form-urlencoded` POST requests.
//!
//! # Features
//!
//! - **Typed send intents**: [`SendIntent`] covers text, HTML and raw messages
//! - **Request signing**: AWS Signature V4 (default) or the legacy `AWS3-HTTPS` scheme
//! - **Pluggable transport**: any [`Transport`] implementation; reqwest by default
//! - **Explicit configuration**: [`SesConfig`] built once, programmatically or from the environment
//! - **Error handling**: construction, transport and API failures kept apart in [`SesError`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{EmailBuilder, SesClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // AWS_REGION, AWS_ACCESS_KEY_ID, AWS_SECRET_KEY, optional AWS_SES_ENDPOINT
//!     let client = SesClient::from_env()?;
//!
//!     let intent = EmailBuilder::new()
//!         .from("sender@example.com")
//!         .to("recipient@example.com")
//!         .subject("Hello from SES")
//!         .text("This is a test email.")
//!         .build()?;
//!
//!     let response = client.send(&intent).await?;
//!     println!("{}", response);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Raw messages
//!
//! ```rust,no_run
//! # use integrations_aws_ses_query::SesClient;
//! # async fn example(client: &SesClient) -> Result<(), Box<dyn std::error::Error>> {
//! let mime = b"From: sender@example.com\r\nTo: recipient@example.com\r\n\
//!              Subject: Raw\r\n\r\nHello\r\n";
//! client.send_raw_email(mime.to_vec()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Testing
//!
//! [`mocks::MockTransport`] records requests and replays queued responses, and
//! [`SesClient::prepare_request`] exposes the exact signed request for a fixed
//! timestamp.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod builders;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod mocks;
pub mod signing;
pub mod types;

pub use builders::{encode_intent, BuilderError, EmailBuilder};
pub use client::{SesClient, SesClientBuilder};
pub use config::{ConfigError, SesConfig, SesConfigBuilder, SigningScheme};
pub use credentials::{AwsCredentials, CredentialError};
pub use error::{SesError, SesResult};
pub use crate::http::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use signing::SigningError;
pub use types::{FormParams, HtmlEmail, PlainTextEmail, RawEmail, SendIntent};
