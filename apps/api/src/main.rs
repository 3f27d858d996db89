mod config;
mod cv;
mod db;
mod errors;
mod generation;
mod identity;
mod models;
mod pagination;
mod portfolios;
mod profile;
mod projects;
mod routes;
mod social;
mod state;
mod templates;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cv::CvParserClient;
use crate::db::{create_pool, run_migrations, seed_default_user};
use crate::identity::SingleTenant;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;
    seed_default_user(&db, &config).await?;

    // Single-tenant owner until real authentication exists
    let owner = Arc::new(SingleTenant(config.default_user_id));
    info!("Serving as user {}", config.default_user_id);

    let cv_parser = CvParserClient::new(&config.cv_parser_url)?;
    info!("CV parser endpoint: {}", cv_parser.endpoint());

    tokio::fs::create_dir_all(&config.uploads_dir).await?;

    let state = AppState {
        db,
        config: config.clone(),
        owner,
        cv_parser,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
