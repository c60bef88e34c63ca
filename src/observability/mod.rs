//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems emit tracing events:
//!     → listener/server (bind, accept, shutdown)
//!     → connection spans (connection_id, peer_addr)
//!     → logging.rs (subscriber, filter, stdout)
//! ```

pub mod logging;

pub use logging::init_logging;
