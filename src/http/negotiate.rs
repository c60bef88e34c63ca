//! Content negotiation.
//!
//! # Responsibilities
//! - Pick a response media type from a raw `Accept` value
//! - Pick a content-coding from a raw `Accept-Encoding` value
//!
//! # Design Decisions
//! - Quality values are not parsed: any multi-value or `q=` header falls
//!   back to a fixed choice (JSON, gzip)
//! - Unknown codings fall back to gzip, not to identity
//! - Matching is case-insensitive substring matching

use std::fmt;

/// Media types a greeting can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Xml,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
        }
    }

    /// Recognize a `Content-Type` header value.
    pub fn from_header(value: &str) -> Option<Self> {
        let value = value.to_ascii_lowercase();
        if value.contains("application/json") {
            Some(ContentType::Json)
        } else if value.contains("application/xml") {
            Some(ContentType::Xml)
        } else {
            None
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-codings applied to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Identity,
    Gzip,
    Deflate,
}

impl ContentEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Identity => "none",
            ContentEncoding::Gzip => "gzip",
            ContentEncoding::Deflate => "deflate",
        }
    }

    /// Recognize a `Content-Encoding` header value; empty means identity.
    pub fn from_header(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Some(ContentEncoding::Identity),
            "gzip" => Some(ContentEncoding::Gzip),
            "deflate" => Some(ContentEncoding::Deflate),
            _ => None,
        }
    }
}

impl fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_multi_value(value: &str) -> bool {
    value.contains(',') || value.contains("q=")
}

/// Select the response media type for an `Accept` value.
pub fn negotiate_content_type(accept: &str) -> ContentType {
    let accept = accept.to_ascii_lowercase();
    if is_multi_value(&accept) {
        return ContentType::Json;
    }
    if accept.contains("application/xml") {
        ContentType::Xml
    } else {
        ContentType::Json
    }
}

/// Select the response content-coding for an `Accept-Encoding` value.
pub fn negotiate_encoding(accept_encoding: &str) -> ContentEncoding {
    let accept_encoding = accept_encoding.to_ascii_lowercase();
    if is_multi_value(&accept_encoding) {
        return ContentEncoding::Gzip;
    }
    if accept_encoding.contains("deflate") {
        ContentEncoding::Deflate
    } else if accept_encoding.contains("gzip") {
        ContentEncoding::Gzip
    } else if accept_encoding == "none" {
        ContentEncoding::Identity
    } else {
        ContentEncoding::Gzip
    }
}
