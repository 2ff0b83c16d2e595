mod config;
mod error;
mod formatter;
mod provider;
mod server;
mod transcript;
mod youtube;

use std::sync::Arc;

use anyhow::Context;
use config::ServerConfig;
use transcript::TranscriptService;
use youtube::YouTubeProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();
    pretty_env_logger::formatted_builder()
        .parse_filters(&config.log_filter)
        .init();
    log::info!("Launching transcript service...");

    let provider = YouTubeProvider::new().context("initializing YouTube transcript client")?;
    let service = TranscriptService::new(Arc::new(provider));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding to {}", addr))?;
    log::info!("Listening on http://{}", addr);

    axum::serve(listener, server::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running transcript server")?;

    log::info!("Transcript service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install Ctrl+C handler: {}", err);
    }
}
