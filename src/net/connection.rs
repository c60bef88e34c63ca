//! A single framed TCP exchange.
//!
//! # Responsibilities
//! - Own one TCP stream for exactly one request/response exchange
//! - Generate unique connection IDs for tracing
//! - Read one framed message, write one message, then close
//!
//! # Design Decisions
//! - No keep-alive: a connection is consumed by `close`
//! - No timeouts: a silent peer blocks the owning task, never the process

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::framer::read_message;

/// Global atomic counter for connection IDs.
/// Relaxed ordering is enough; IDs only need to be unique.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Generate a new unique connection ID.
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Failures on an established or establishing connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read message: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write message: {0}")]
    Write(#[source] std::io::Error),
}

/// One side of a single request/response exchange.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer_addr: SocketAddr,
    id: ConnectionId,
    read_capacity: usize,
}

impl Connection {
    /// Wrap an accepted or connected stream.
    pub fn new(stream: TcpStream, peer_addr: SocketAddr, read_capacity: usize) -> Self {
        Self {
            stream,
            peer_addr,
            id: ConnectionId::new(),
            read_capacity,
        }
    }

    /// Dial `addr` (a `host:port` string).
    pub async fn connect(addr: &str, read_capacity: usize) -> Result<Self, ConnectionError> {
        let connect_err = |source| ConnectionError::Connect {
            addr: addr.to_string(),
            source,
        };
        let stream = TcpStream::connect(addr).await.map_err(connect_err)?;
        let peer_addr = stream.peer_addr().map_err(connect_err)?;

        let connection = Self::new(stream, peer_addr, read_capacity);
        tracing::debug!(
            connection_id = %connection.id,
            peer_addr = %peer_addr,
            "Connected"
        );
        Ok(connection)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Read until one full message has been framed.
    pub async fn read_message(&mut self) -> Result<Vec<u8>, ConnectionError> {
        read_message(&mut self.stream, self.read_capacity)
            .await
            .map_err(ConnectionError::Read)
    }

    /// Write a complete encoded message.
    pub async fn send(&mut self, bytes: &[u8]) -> Result<(), ConnectionError> {
        self.stream
            .write_all(bytes)
            .await
            .map_err(ConnectionError::Write)?;
        self.stream.flush().await.map_err(ConnectionError::Write)
    }

    /// Shut down the write half and drop the stream.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            tracing::trace!(connection_id = %self.id, error = %e, "Shutdown failed");
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        tracing::trace!(connection_id = %self.id, "Connection closed");
    }
}
