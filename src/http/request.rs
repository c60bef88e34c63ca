//! Request model and wire codec.
//!
//! # Responsibilities
//! - Hold the fields of a single GET request
//! - Encode a request into its wire form
//! - Decode wire bytes back into a request, leniently
//!
//! # Design Decisions
//! - Requests never carry a body
//! - Decoding never fails: a short request line leaves fields empty
//! - `Accept-Encoding` is omitted on the wire when its value is "none"

use std::fmt::Write as _;

use crate::http::headers::RawMessage;

/// Protocol version sent and expected on every message.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Accept-Encoding value meaning "no encoding acceptable".
pub const NO_ENCODING: &str = "none";

/// A decoded or to-be-sent request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Path plus optional query string.
    pub target: String,
    pub version: String,
    /// `host:port` of the server.
    pub host: String,
    /// Raw `Accept` header value.
    pub accept: String,
    /// Raw `Accept-Encoding` header value, or "none".
    pub accept_encoding: String,
}

impl Request {
    /// Build a GET request for `target` on `host`.
    pub fn get(
        target: impl Into<String>,
        host: impl Into<String>,
        accept: impl Into<String>,
        accept_encoding: impl Into<String>,
    ) -> Self {
        Self {
            method: "GET".to_string(),
            target: target.into(),
            version: HTTP_VERSION.to_string(),
            host: host.into(),
            accept: accept.into(),
            accept_encoding: accept_encoding.into(),
        }
    }

    /// Serialize into wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write!(out, "{} {} {}\r\n", self.method, self.target, self.version);
        let _ = write!(out, "Host: {}\r\n", self.host);
        let _ = write!(out, "Accept: {}\r\n", self.accept);
        if self.accept_encoding != NO_ENCODING {
            let _ = write!(out, "Accept-Encoding: {}\r\n", self.accept_encoding);
        }
        out.push_str("\r\n");
        out.into_bytes()
    }

    /// Parse wire bytes; malformed input degrades to empty fields.
    pub fn decode(bytes: &[u8]) -> Self {
        let raw = RawMessage::split(bytes);
        let mut request = Request::default();

        if let Some((method, target, version)) = raw.start_tokens() {
            request.method = method.to_string();
            request.target = target.to_string();
            request.version = version.to_string();
        }

        let header = |name: &str| raw.headers.get(name).unwrap_or_default().to_string();
        request.host = header("host");
        request.accept = header("accept");
        request.accept_encoding = header("accept-encoding");
        if request.accept_encoding.is_empty() {
            request.accept_encoding = NO_ENCODING.to_string();
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Request {
        Request::get(
            "/greet/42?name=Ada",
            "127.0.0.1:6636",
            "application/json",
            "gzip",
        )
    }

    #[test]
    fn encode_writes_expected_wire_form() {
        let bytes = sample().encode();
        assert_eq!(
            bytes,
            b"GET /greet/42?name=Ada HTTP/1.1\r\n\
              Host: 127.0.0.1:6636\r\n\
              Accept: application/json\r\n\
              Accept-Encoding: gzip\r\n\
              \r\n"
                .to_vec()
        );
    }

    #[test]
    fn encode_omits_none_encoding() {
        let mut request = sample();
        request.accept_encoding = NO_ENCODING.into();
        let text = String::from_utf8(request.encode()).unwrap();
        assert!(!text.contains("Accept-Encoding"));
        assert!(text.ends_with("Accept: application/json\r\n\r\n"));
    }

    #[test]
    fn round_trip_preserves_fields() {
        let request = sample();
        assert_eq!(Request::decode(&request.encode()), request);
    }

    #[test]
    fn round_trip_defaults_missing_encoding_to_none() {
        let mut request = sample();
        request.accept_encoding = NO_ENCODING.into();
        let decoded = Request::decode(&request.encode());
        assert_eq!(decoded.accept_encoding, "none");
        assert_eq!(decoded, request);
    }

    #[test]
    fn decode_matches_header_names_case_insensitively() {
        let decoded = Request::decode(
            b"GET / HTTP/1.1\r\nhOsT: h:1\r\nACCEPT: application/xml\r\naccept-encoding: deflate\r\nX-Other: y\r\n\r\n",
        );
        assert_eq!(decoded.host, "h:1");
        assert_eq!(decoded.accept, "application/xml");
        assert_eq!(decoded.accept_encoding, "deflate");
    }

    #[test]
    fn decode_short_request_line_leaves_fields_empty() {
        let decoded = Request::decode(b"GET /\r\nHost: h:1\r\n\r\n");
        assert!(decoded.method.is_empty());
        assert!(decoded.target.is_empty());
        assert!(decoded.version.is_empty());
        assert_eq!(decoded.host, "h:1");
    }

    #[test]
    fn decode_garbage_does_not_panic() {
        let decoded = Request::decode(&[0xff, 0xfe, b'\r', b'\n']);
        assert_eq!(decoded.accept_encoding, "none");
        assert!(decoded.target.is_empty());
    }
}
