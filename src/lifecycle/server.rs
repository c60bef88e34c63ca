//! Server startup and stop.
//!
//! Startup order: bind the listener first (so bind errors surface before
//! anything runs), then spawn the accept loop with a shutdown subscription.

use std::net::SocketAddr;

use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::http::GreetServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::net::{Listener, ListenerError};

/// A greeting server running on a background task.
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    handle: JoinHandle<std::io::Result<()>>,
}

impl RunningServer {
    /// Bind per `config` and start accepting.
    pub async fn start(config: &AppConfig) -> Result<Self, ListenerError> {
        let listener = Listener::bind(&config.server).await?;
        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        let shutdown = Shutdown::new();
        let server = GreetServer::new(config);
        let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

        Ok(Self {
            local_addr,
            shutdown,
            handle,
        })
    }

    /// Address the server actually bound (useful with port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting and wait for the accept loop to exit.
    pub async fn stop(self) -> std::io::Result<()> {
        self.shutdown.trigger();
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(std::io::Error::other(e)),
        }
    }
}
