mod category;
mod config;
mod errors;
mod meme_client;
mod recommend;
mod routes;
mod sentiment;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::meme_client::MemeClient;
use crate::routes::build_router;
use crate::sentiment::lexicon::LexiconScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MemeLens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the polarity scorer. Downloads the lexicon on first run;
    // a failed load here is fatal — the service cannot classify without it.
    let scorer =
        LexiconScorer::load_or_fetch(Path::new(&config.lexicon_path), &config.lexicon_url).await?;
    info!("Polarity lexicon loaded from {}", config.lexicon_path);

    // Initialize meme API client
    let memes = MemeClient::new(config.meme_api_base.clone());
    info!("Meme client initialized (base: {})", config.meme_api_base);

    // Build app state
    let state = AppState {
        scorer: Arc::new(scorer),
        memes,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
