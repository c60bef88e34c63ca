//! Greeting payload and its JSON/XML representations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::http::negotiate::ContentType;
use crate::payload::PayloadError;

/// Identity of the student being greeted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub id: String,
}

/// The business payload served by `/greet/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "greeting")]
pub struct Greeting {
    pub student: Student,
    pub greeter: String,
}

impl Greeting {
    pub fn new(name: impl Into<String>, id: impl Into<String>, greeter: impl Into<String>) -> Self {
        Self {
            student: Student {
                name: name.into(),
                id: id.into(),
            },
            greeter: greeter.into(),
        }
    }

    /// Serialize as the body for `content_type`.
    pub fn to_body(&self, content_type: ContentType) -> Result<Vec<u8>, PayloadError> {
        match content_type {
            ContentType::Json => Ok(serde_json::to_vec(self)?),
            ContentType::Xml => quick_xml::se::to_string(self)
                .map(String::into_bytes)
                .map_err(|e| PayloadError::Xml(e.to_string())),
        }
    }

    /// Parse an (already decompressed) body in `content_type`.
    pub fn from_body(content_type: ContentType, body: &[u8]) -> Result<Self, PayloadError> {
        match content_type {
            ContentType::Json => Ok(serde_json::from_slice(body)?),
            ContentType::Xml => {
                let text = std::str::from_utf8(body).map_err(|e| PayloadError::Xml(e.to_string()))?;
                quick_xml::de::from_str(text).map_err(|e| PayloadError::Xml(e.to_string()))
            }
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{student: {{name: {}, id: {}}}, greeter: {}}}",
            self.student.name, self.student.id, self.greeter
        )
    }
}
