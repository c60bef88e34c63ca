//! Route matching logic.
//!
//! # Responsibilities
//! - Parse a request target into path and query
//! - Match `/` exactly and `/greet/` by prefix
//! - Extract the greet id segment and the `name` query parameter
//!
//! # Design Decisions
//! - A target that does not start with `/` is invalid, not unmatched
//! - Control bytes anywhere, or a `%` not followed by two hex digits in
//!   the path, make the target invalid
//! - The path is percent-decoded but not normalized: `..` stays a segment
//! - The query is read through `url` resolved against `http://localhost`
//! - Path matching is case-sensitive

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

const GREET_PREFIX: &str = "/greet/";

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The static page at `/`.
    Root,
    /// `/greet/<id>[?name=<greeter>]`.
    Greet {
        id: String,
        /// Non-empty `name` query parameter, if any.
        greeter: Option<String>,
    },
}

/// Why a target did not resolve to a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid request target '{0}'")]
    InvalidTarget(String),

    #[error("no route for path '{0}'")]
    NotFound(String),
}

/// Resolve a raw request target to a route.
pub fn resolve(target: &str) -> Result<Route, RouteError> {
    let url = parse_target(target)?;
    let path = percent_decode_str(raw_path(target))
        .decode_utf8_lossy()
        .into_owned();

    if path == "/" {
        return Ok(Route::Root);
    }
    if path.starts_with(GREET_PREFIX) {
        // "/greet/<id>/..." splits into ["", "greet", "<id>", ...].
        let id = path.split('/').nth(2).unwrap_or_default().to_string();
        let greeter = url
            .query_pairs()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());
        return Ok(Route::Greet { id, greeter });
    }

    Err(RouteError::NotFound(path))
}

fn parse_target(target: &str) -> Result<Url, RouteError> {
    let invalid = || RouteError::InvalidTarget(target.to_string());
    if !target.starts_with('/') {
        return Err(invalid());
    }
    if target.bytes().any(|b| b.is_ascii_control()) {
        return Err(invalid());
    }
    if !has_valid_escapes(raw_path(target)) {
        return Err(invalid());
    }
    let base = Url::parse("http://localhost/").map_err(|_| invalid())?;
    base.join(target).map_err(|_| invalid())
}

/// The path part of a target, without query, fragment or `//authority`.
fn raw_path(target: &str) -> &str {
    let end = target.find(|c| c == '?' || c == '#').unwrap_or(target.len());
    let path = &target[..end];
    match path.strip_prefix("//") {
        Some(rest) => rest.find('/').map_or("", |i| &rest[i..]),
        None => path,
    }
}

/// Every `%` must start a two-hex-digit escape.
fn has_valid_escapes(path: &str) -> bool {
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !matches!(escape, Some([a, b]) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
