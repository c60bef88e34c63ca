//! Route dispatch and response building.
//!
//! # Responsibilities
//! - Dispatch a decoded request to the root or greet handler
//! - Negotiate media type and content-coding for the greeting
//! - Map routing and payload failures to 400/404/500 responses
//!
//! # Design Decisions
//! - Immutable after construction (cloned into each connection task)
//! - Never fails: every request produces exactly one response

use crate::config::IdentityConfig;
use crate::http::negotiate::{negotiate_content_type, negotiate_encoding, ContentEncoding};
use crate::http::{Request, Response};
use crate::payload::{self, Greeting};
use crate::routing::matcher::{resolve, Route, RouteError};

/// Dispatches requests for one configured identity.
#[derive(Debug, Clone)]
pub struct Router {
    identity: IdentityConfig,
}

impl Router {
    pub fn new(identity: IdentityConfig) -> Self {
        Self { identity }
    }

    /// Produce the response for `request`.
    pub fn handle(&self, request: &Request) -> Response {
        match resolve(&request.target) {
            Ok(Route::Root) => self.root(),
            Ok(Route::Greet { id, greeter }) => self.greet(request, &id, greeter),
            Err(RouteError::InvalidTarget(target)) => {
                tracing::debug!(target = %target, "Invalid request target");
                Response::bad_request()
            }
            Err(RouteError::NotFound(path)) => {
                tracing::debug!(path = %path, "No route matched");
                Response::not_found()
            }
        }
    }

    fn root(&self) -> Response {
        let page = format!(
            "<html><body><h1>Hello, world! I am {}</h1></body></html>",
            self.identity.name
        );
        Response::ok("text/html", ContentEncoding::Identity.as_str(), page.into_bytes())
    }

    fn greet(&self, request: &Request, id: &str, greeter: Option<String>) -> Response {
        if id != self.identity.id {
            tracing::debug!(id = %id, "Unknown greet id");
            return Response::not_found();
        }

        let greeter = greeter.unwrap_or_else(|| self.identity.name.clone());
        let greeting = Greeting::new(&self.identity.name, &self.identity.id, greeter);

        let content_type = negotiate_content_type(&request.accept);
        let encoding = negotiate_encoding(&request.accept_encoding);

        match payload::render(&greeting, content_type, encoding) {
            Ok(data) => Response::ok(content_type.as_str(), encoding.as_str(), data),
            Err(e) => {
                tracing::warn!(error = %e, content_type = %content_type, encoding = %encoding, "Failed to render greeting");
                Response::internal_error()
            }
        }
    }
}
