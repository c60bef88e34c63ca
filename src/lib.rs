//! Hand-rolled HTTP/1.1 greeting exchange over raw TCP.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod payload;
pub mod routing;

pub use config::AppConfig;
pub use http::{Client, GreetServer, Request, Response};
pub use lifecycle::{RunningServer, Shutdown};
