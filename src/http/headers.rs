//! Message head splitting and lenient header parsing.
//!
//! # Responsibilities
//! - Locate the CRLFCRLF head terminator
//! - Split a raw message into start line, header map and body slice
//! - Parse header lines without ever failing the whole message
//!
//! # Design Decisions
//! - Header names are stored lowercased; lookups are case-insensitive
//! - Lines without a `": "` separator are skipped
//! - A repeated header overwrites the earlier value
//! - The body is a byte slice taken by offset, never re-split text

use std::collections::HashMap;

/// Line separator used on the wire.
pub const CRLF: &str = "\r\n";

/// Blank-line terminator separating the head from the body.
pub const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Find the offset of the head terminator in `buf`, if present.
pub fn find_head_end(buf: &[u8]) -> Option<usize> {
    memchr::memmem::find(buf, HEAD_TERMINATOR)
}

/// Case-insensitive header map built from raw header lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: HashMap<String, String>,
}

impl HeaderMap {
    /// Parse `Name: value` lines, stopping at the first empty line.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut entries = HashMap::new();
        for line in lines {
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(": ") {
                entries.insert(name.to_ascii_lowercase(), value.to_string());
            }
        }
        Self { entries }
    }

    /// Look up a header by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A message split into its textual head and raw body.
#[derive(Debug)]
pub struct RawMessage<'a> {
    /// Start line split on single spaces.
    pub start_line: Vec<String>,
    pub headers: HeaderMap,
    pub body: &'a [u8],
}

impl<'a> RawMessage<'a> {
    /// Split `bytes` into start line, headers and body.
    ///
    /// Without a terminator the whole input is treated as head and the body
    /// is empty. Invalid UTF-8 in the head is replaced, not rejected.
    pub fn split(bytes: &'a [u8]) -> Self {
        let (head, body): (&[u8], &[u8]) = match find_head_end(bytes) {
            Some(end) => (&bytes[..end], &bytes[end + HEAD_TERMINATOR.len()..]),
            None => (bytes, &[]),
        };

        let head = String::from_utf8_lossy(head);
        let mut lines = head.split(CRLF);
        let start_line = lines
            .next()
            .map(|line| line.split(' ').map(str::to_string).collect())
            .unwrap_or_default();
        let headers = HeaderMap::parse(lines);

        Self {
            start_line,
            headers,
            body,
        }
    }

    /// The first three start-line tokens, or `None` when fewer are present.
    pub fn start_tokens(&self) -> Option<(&str, &str, &str)> {
        match self.start_line.as_slice() {
            [a, b, c, ..] => Some((a.as_str(), b.as_str(), c.as_str())),
            _ => None,
        }
    }
}
