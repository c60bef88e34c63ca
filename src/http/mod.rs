//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! bytes from a connection
//!     → framer.rs (one complete message)
//!     → headers.rs (start line, header map, body slice)
//!     → request.rs / response.rs (decode into records)
//!     → [routing decides the response] (server)
//!     → negotiate.rs (media type and content-coding)
//!     → request.rs / response.rs (encode)
//!     → bytes to the connection
//! ```
//!
//! server.rs and client.rs drive that flow over the network layer.

pub mod client;
pub mod framer;
pub mod headers;
pub mod negotiate;
pub mod request;
pub mod response;
pub mod server;

pub use client::{Client, ClientError, Endpoint};
pub use request::Request;
pub use response::Response;
pub use server::GreetServer;
