//! Catalog Search - a minimal HTTP façade over a music catalog search API.
//!
//! Accepts `GET /search?query=..&type=..&limit=..`, forwards one search to
//! the Spotify Web API using service-level client credentials, and answers
//! with a flat list of name/uri pairs plus a count.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
#[cfg(test)]
pub mod test_utils;

use std::sync::Arc;

use axum::Router;
use clap::Parser;

use api::AppState;
use catalog::{CatalogService, SpotifyClient};
use config::Config;
use error::Error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();

    // Held until main returns so the file writer flushes on shutdown
    let _log_guard = logging::init(&args.log_dir)?;

    let config = match args.into_config().map_err(Error::from) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the router around one authenticated provider client for the whole process.
fn build_app(config: &Config) -> error::Result<Router> {
    let client = SpotifyClient::new(config.credentials.clone())?;
    let catalog = CatalogService::new(Arc::new(client), config.market.clone());
    Ok(api::create_router(AppState::new(catalog)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
