use axum::Router;
use tracing::info;

/// Body returned for every request on the liveness port.
pub const LIVENESS_BODY: &str = "Bot Online!";

/// Serve the always-200 liveness endpoint used by external uptime probes.
///
/// Runs as an independent listener; it never touches the bot's state.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let app = Router::new().fallback(liveness);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "Liveness HTTP listener started.");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn liveness() -> &'static str {
    LIVENESS_BODY
}
