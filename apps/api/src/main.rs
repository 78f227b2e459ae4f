mod cache;
mod config;
mod errors;
mod pricing;
mod quote;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::{FileCache, LocalCache, MemoryCache};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sticker Quote API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Pricing defaults: vinyl R{:.2}/m², VAT {:.0}%",
        config.default_vinyl_cost,
        config.default_vat_rate * 100.0
    );

    let cache = build_cache(&config).await?;

    let state = AppState {
        config: config.clone(),
        cache,
    };

    // The quote form is served from a different origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// File-backed when `QUOTE_CACHE_PATH` is set, otherwise in-memory.
async fn build_cache(config: &Config) -> Result<Arc<dyn LocalCache>> {
    match &config.quote_cache_path {
        Some(path) => Ok(Arc::new(FileCache::open(path).await?)),
        None => {
            info!("Quote cache kept in memory");
            Ok(Arc::new(MemoryCache::new()))
        }
    }
}
