//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (server.rs):
//!     Load config → Validate → Bind listener → Spawn accept loop
//!
//! Shutdown (signals.rs → shutdown.rs):
//!     Ctrl+C (or explicit trigger) → Stop accepting → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal
//! - Shutdown never interrupts an exchange in progress

pub mod server;
pub mod shutdown;
pub mod signals;

pub use server::RunningServer;
pub use shutdown::Shutdown;
pub use signals::wait_for_ctrl_c;
