mod api;
mod config;
mod dto;
mod error;
mod state;
mod templates;
mod tmpl;
mod upstream;

#[cfg(test)]
mod testing;

use crate::{config::Config, error::Error, state::AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");
    let config = Config::from_env()?;
    let port = config.port;
    info!("Reading stations from {}", config.feed_url);
    let state = Arc::new(AppState::new(config)?);

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening to port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
