//! Response model and wire codec.
//!
//! # Responsibilities
//! - Hold status, representation headers and body of a response
//! - Encode a response into its wire form
//! - Decode wire bytes back into a response, leniently
//!
//! # Design Decisions
//! - The reason phrase is always the literal "OK", whatever the status
//! - `Content-Length` is recomputed from the body at encode time
//! - The decoded body is the raw byte slice after the head terminator, so
//!   compressed bodies containing CRLF survive intact

use std::fmt::Write as _;

use crate::http::headers::RawMessage;
use crate::http::request::{HTTP_VERSION, NO_ENCODING};

/// Status codes produced by this system.
pub mod status {
    pub const OK: &str = "200";
    pub const BAD_REQUEST: &str = "400";
    pub const NOT_FOUND: &str = "404";
    pub const INTERNAL_ERROR: &str = "500";
}

/// A decoded or to-be-sent response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub version: String,
    pub status: String,
    /// Empty when no `Content-Type` header applies.
    pub content_type: String,
    /// Empty, "none", "gzip" or "deflate".
    pub content_encoding: String,
    /// Length of `data`; on the receiving side, as declared by the peer.
    pub content_length: usize,
    pub data: Vec<u8>,
}

impl Response {
    /// A body-less response with the given status.
    pub fn empty(status: &str) -> Self {
        Self {
            version: HTTP_VERSION.to_string(),
            status: status.to_string(),
            ..Self::default()
        }
    }

    /// A 200 response carrying `data`.
    pub fn ok(
        content_type: impl Into<String>,
        content_encoding: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            version: HTTP_VERSION.to_string(),
            status: status::OK.to_string(),
            content_type: content_type.into(),
            content_encoding: content_encoding.into(),
            content_length: data.len(),
            data,
        }
    }

    pub fn bad_request() -> Self {
        Self::empty(status::BAD_REQUEST)
    }

    pub fn not_found() -> Self {
        Self::empty(status::NOT_FOUND)
    }

    pub fn internal_error() -> Self {
        Self::empty(status::INTERNAL_ERROR)
    }

    /// True when the body carries a content-coding that must be undone.
    pub fn is_encoded(&self) -> bool {
        !self.content_encoding.is_empty() && self.content_encoding != NO_ENCODING
    }

    /// Serialize into wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut head = String::new();
        // Writing to a String cannot fail.
        let _ = write!(head, "{} {} OK\r\n", self.version, self.status);
        if !self.content_type.is_empty() {
            let _ = write!(head, "Content-Type: {}\r\n", self.content_type);
        }
        if self.is_encoded() {
            let _ = write!(head, "Content-Encoding: {}\r\n", self.content_encoding);
        }
        let _ = write!(head, "Content-Length: {}\r\n\r\n", self.data.len());

        let mut out = head.into_bytes();
        out.extend_from_slice(&self.data);
        out
    }

    /// Parse wire bytes; malformed input degrades to empty fields.
    pub fn decode(bytes: &[u8]) -> Self {
        let raw = RawMessage::split(bytes);
        let mut response = Response::default();

        if let Some((version, status, _reason)) = raw.start_tokens() {
            response.version = version.to_string();
            response.status = status.to_string();
        }

        let headers = &raw.headers;
        response.content_type = headers.get("content-type").unwrap_or_default().to_string();
        response.content_encoding = headers
            .get("content-encoding")
            .unwrap_or_default()
            .to_string();
        response.content_length = headers
            .get("content-length")
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        response.data = raw.body.to_vec();

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_literal_ok_reason() {
        let text = String::from_utf8(Response::not_found().encode()).unwrap();
        assert_eq!(text, "HTTP/1.1 404 OK\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn encode_omits_none_encoding() {
        let response = Response::ok("text/html", "none", b"<p>hi</p>".to_vec());
        let text = String::from_utf8(response.encode()).unwrap();
        assert_eq!(
            text,
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 9\r\n\r\n<p>hi</p>"
        );
    }

    #[test]
    fn encode_recomputes_content_length() {
        let mut response = Response::ok("application/json", "", b"{}".to_vec());
        response.content_length = 999;
        let text = String::from_utf8(response.encode()).unwrap();
        assert!(text.contains("Content-Length: 2\r\n"));
    }

    #[test]
    fn round_trip_preserves_binary_body() {
        let data = vec![0x1f, 0x8b, b'\r', b'\n', b'\r', b'\n', 0x00, b'\r', 0xff, b'\n'];
        let response = Response::ok("application/json", "gzip", data);
        let decoded = Response::decode(&response.encode());
        assert_eq!(decoded, response);
    }

    #[test]
    fn round_trip_empty_body() {
        let response = Response::internal_error();
        let decoded = Response::decode(&response.encode());
        assert_eq!(decoded, response);
        assert!(decoded.data.is_empty());
    }

    #[test]
    fn decode_short_status_line_leaves_fields_empty() {
        let decoded = Response::decode(b"HTTP/1.1 200\r\nContent-Length: 2\r\n\r\nhi");
        assert!(decoded.version.is_empty());
        assert!(decoded.status.is_empty());
        assert_eq!(decoded.content_length, 2);
        assert_eq!(decoded.data, b"hi");
    }

    #[test]
    fn decode_bad_length_is_zero() {
        let decoded = Response::decode(b"HTTP/1.1 200 OK\r\nContent-Length: x\r\n\r\n");
        assert_eq!(decoded.content_length, 0);
        assert_eq!(decoded.status, "200");
    }

    #[test]
    fn decode_without_terminator_has_no_body() {
        let decoded = Response::decode(b"HTTP/1.1 404 OK\r\nContent-Length: 0");
        assert_eq!(decoded.status, "404");
        assert!(decoded.data.is_empty());
    }
}
