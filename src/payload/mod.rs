//! Business payload subsystem.
//!
//! # Data Flow
//! ```text
//! Server:  Greeting → greeting.rs (JSON | XML) → compression.rs (gzip | deflate | none) → body
//! Client:  body → compression.rs (undo coding) → greeting.rs (parse) → Greeting
//! ```
//!
//! The protocol layer never looks inside a body; these are the only two
//! places where body bytes are produced or interpreted.

pub mod compression;
pub mod greeting;

use thiserror::Error;

use crate::http::negotiate::{ContentEncoding, ContentType};
use crate::http::Response;

pub use greeting::{Greeting, Student};

/// Errors while marshalling or unmarshalling a body.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("compression error: {0}")]
    Compression(#[from] std::io::Error),

    #[error("unsupported content encoding: {0}")]
    UnsupportedEncoding(String),
}

/// Serialize `greeting` as `content_type`, then apply `encoding`.
pub fn render(
    greeting: &Greeting,
    content_type: ContentType,
    encoding: ContentEncoding,
) -> Result<Vec<u8>, PayloadError> {
    let body = greeting.to_body(content_type)?;
    Ok(compression::compress(encoding, &body)?)
}

/// Undo the content-coding declared by `response`.
pub fn decoded_body(response: &Response) -> Result<Vec<u8>, PayloadError> {
    let encoding = ContentEncoding::from_header(&response.content_encoding)
        .ok_or_else(|| PayloadError::UnsupportedEncoding(response.content_encoding.clone()))?;
    Ok(compression::decompress(encoding, &response.data)?)
}

/// Parse a greeting out of a decoded body.
///
/// Returns `None` when the content type is neither JSON nor XML.
pub fn parse_greeting(content_type: &str, body: &[u8]) -> Option<Result<Greeting, PayloadError>> {
    ContentType::from_header(content_type).map(|ty| Greeting::from_body(ty, body))
}
