//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Decoded Request (target, accept, accept-encoding)
//!     → matcher.rs (parse target, resolve to a Route)
//!     → router.rs (dispatch to handler, negotiate, render)
//!     → Response record
//! ```
//!
//! # Design Decisions
//! - Two fixed routes; no routing table
//! - Immutable after construction, shared by value with each connection task
//! - Failures become status codes here; nothing below the router sees them

pub mod matcher;
pub mod router;

pub use matcher::{resolve, Route, RouteError};
pub use router::Router;
