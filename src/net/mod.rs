//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Server: TCP accept
//!     → listener.rs (bind, accept loop source)
//!     → connection.rs (framed read, write, close)
//!     → hand off to the HTTP layer
//!
//! Client: connection.rs (connect) → write request → framed read → close
//! ```
//!
//! # Design Decisions
//! - One exchange per connection, then close
//! - No TLS, no pooling, no keep-alive

pub mod connection;
pub mod listener;

pub use connection::{Connection, ConnectionError, ConnectionId};
pub use listener::{Listener, ListenerError};
