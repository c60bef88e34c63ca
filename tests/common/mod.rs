//! Shared utilities for end-to-end tests.

use std::net::SocketAddr;

use bare_http::config::{AppConfig, IdentityConfig};
use bare_http::lifecycle::RunningServer;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

pub const NAME: &str = "Grace Hopper";
pub const ID: &str = "2306216636";

/// Config bound to an ephemeral loopback port.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.bind_address = "127.0.0.1:0".into();
    config.identity = IdentityConfig {
        name: NAME.into(),
        id: ID.into(),
    };
    config
}

/// Start a greeting server on an ephemeral port.
pub async fn start_server() -> RunningServer {
    RunningServer::start(&test_config()).await.unwrap()
}

/// Write raw request bytes and read until the server closes.
#[allow(dead_code)]
pub async fn raw_exchange(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}
