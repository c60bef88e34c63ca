//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server
//! and client. All types derive Serde traits for deserialization from config
//! files, and every section falls back to its defaults when omitted.

use serde::{Deserialize, Serialize};

use crate::http::framer::DEFAULT_READ_CAPACITY;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener and per-connection settings.
    pub server: ServerConfig,

    /// Identity served by `/` and `/greet/<id>`.
    pub identity: IdentityConfig,

    /// Client-side exchange settings.
    pub client: ClientConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:6636").
    pub bind_address: String,

    /// Size of the buffer each socket read fills.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:6636".to_string(),
            read_buffer_size: DEFAULT_READ_CAPACITY,
        }
    }
}

/// The student whose greeting is served.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Display name, also the default greeter.
    pub name: String,

    /// Identifier accepted in `/greet/<id>`.
    pub id: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "Grace Hopper".to_string(),
            id: "2306216636".to_string(),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Size of the buffer each socket read fills.
    pub read_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_CAPACITY,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
