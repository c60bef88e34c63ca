//! Process signal handling.
//!
//! Only Ctrl+C is observed; it ends the accept loop through `Shutdown`.

/// Resolve when the process receives Ctrl+C.
pub async fn wait_for_ctrl_c() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::info!("Ctrl+C received");
    Ok(())
}
