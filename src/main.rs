//! Greeting server.
//!
//! Serves two endpoints over a hand-rolled HTTP/1.1 codec:
//!
//! ```text
//!   GET /                       → HTML greeting page
//!   GET /greet/<id>[?name=...]  → greeting as JSON or XML, gzip/deflate/none
//! ```
//!
//! ```text
//!   TCP accept ─▶ framer ─▶ decode ─▶ router ─▶ negotiate ─▶ encode ─▶ write ─▶ close
//!        │                                                                  
//!        └── one task per connection, nothing shared but the router
//! ```

use std::path::PathBuf;

use clap::Parser;

use bare_http::config::load_or_default;
use bare_http::lifecycle::{wait_for_ctrl_c, RunningServer};
use bare_http::observability::init_logging;

#[derive(Parser)]
#[command(name = "bare-http")]
#[command(about = "Greeting server speaking hand-rolled HTTP/1.1", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; built-in defaults otherwise.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    init_logging(&config.observability)?;
    tracing::info!("bare-http v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.server.bind_address,
        read_buffer_size = config.server.read_buffer_size,
        identity_id = %config.identity.id,
        "Configuration loaded"
    );

    let server = RunningServer::start(&config).await?;
    println!("Server listening on {}", server.local_addr());

    wait_for_ctrl_c().await?;
    server.stop().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
