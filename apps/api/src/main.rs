mod catalog;
mod composer;
mod config;
mod errors;
mod generation;
mod history;
mod image_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::history::{HistoryStore, MemoryHistoryStore, PgHistoryStore};
use crate::image_client::ImageClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ThinkDraw API v{}", env!("CARGO_PKG_VERSION"));

    let history = open_history_store(&config).await?;

    let images = ImageClient::new(
        config.openai_base_url.clone(),
        config.image_max_retries,
        config.image_retry_delay,
    )?;
    info!("Image client initialized (model: {})", image_client::MODEL);
    if config.openai_api_key.is_none() {
        info!("OPENAI_API_KEY not set; requests must carry their own key");
    }

    let state = AppState::new(config.clone(), history, images);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise an in-process store.
async fn open_history_store(config: &Config) -> Result<Arc<dyn HistoryStore>> {
    let capacity = config.history_capacity;
    match config.database_url.as_deref() {
        Some(url) => {
            let store = PgHistoryStore::connect(url, capacity).await?;
            info!("History store: PostgreSQL (capacity {capacity})");
            Ok(Arc::new(store))
        }
        None => {
            info!("History store: in-memory (capacity {capacity})");
            Ok(Arc::new(MemoryHistoryStore::new(capacity)))
        }
    }
}
