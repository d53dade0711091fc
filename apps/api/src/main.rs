mod config;
mod errors;
mod extraction;
mod models;
mod parsing;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::parsing::skills::SkillVocabulary;
use crate::parsing::ResumeParser;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::ensure_upload_dir;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    ensure_upload_dir(&config.upload_dir).await?;
    info!("Saving uploads to {}", config.upload_dir.display());

    // Vocabulary, patterns and language model are built once and shared read-only
    let vocabulary = SkillVocabulary::default();
    let parser = ResumeParser::new(&vocabulary)?;
    info!("Resume parser initialized ({} skill keywords)", vocabulary.keywords().len());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT must form a valid socket address")?;

    let state = AppState {
        config: Arc::new(config),
        extractor: Arc::new(PdfTextExtractor),
        parser: Arc::new(parser),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
