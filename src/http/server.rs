//! Greeting server: the accept loop and per-connection lifecycle.
//!
//! # Responsibilities
//! - Accept connections until shutdown is signalled
//! - Spawn one task per connection
//! - Drive each exchange: frame → decode → route → encode → write → close
//!
//! # Design Decisions
//! - Connection tasks share only the immutable router
//! - A failing connection is logged and dropped; the loop keeps going
//! - Shutdown stops accepting; in-flight exchanges finish on their own

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::Instrument;

use crate::config::AppConfig;
use crate::http::{Request, Response};
use crate::net::{Connection, Listener};
use crate::routing::Router;

/// HTTP server for the greeting endpoints.
pub struct GreetServer {
    router: Arc<Router>,
}

impl GreetServer {
    /// Create a new server with the given configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            router: Arc::new(Router::new(config.identity.clone())),
        }
    }

    /// Run the accept loop until `shutdown` fires.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Greeting server starting");

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received");
                    break;
                }
                accepted = listener.accept() => match accepted {
                    Ok(connection) => {
                        let span = tracing::debug_span!(
                            "connection",
                            connection_id = %connection.id(),
                            peer_addr = %connection.peer_addr()
                        );
                        let router = Arc::clone(&self.router);
                        tokio::spawn(serve_connection(connection, router).instrument(span));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Accept failed");
                    }
                },
            }
        }

        tracing::info!("Greeting server stopped");
        Ok(())
    }
}

/// Serve exactly one exchange on `connection`, then close it.
pub async fn serve_connection(mut connection: Connection, router: Arc<Router>) {
    let bytes = match connection.read_message().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Dropping connection");
            return;
        }
    };

    let request = Request::decode(&bytes);
    let response: Response = router.handle(&request);

    tracing::debug!(
        method = %request.method,
        target = %request.target,
        status = %response.status,
        content_type = %response.content_type,
        content_encoding = %response.content_encoding,
        body_bytes = response.data.len(),
        "Request served"
    );

    if let Err(e) = connection.send(&response.encode()).await {
        tracing::warn!(error = %e, "Failed to send response");
        return;
    }
    connection.close().await;
}
