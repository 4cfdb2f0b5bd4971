use anyhow::{Context, Result};
use axum::Router;
use models::movie::Movie;
use std::{fs, io::ErrorKind};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod validation;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    tracing::info!("Starting movie-api with config: {:?}", cfg);

    // --- Load the seed dataset (held only in memory from here on) ---
    let seed = load_seed(&cfg.seed_path)?;
    tracing::info!("Loaded {} movies from {}", seed.len(), cfg.seed_path);

    let store = services::movie_service::MovieStore::new(seed);

    // --- Build router ---
    let app: Router = routes::routes::routes(cfg.allowed_origins.clone()).with_state(store);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Read the startup dataset. A missing file means an empty collection; a
/// malformed file is a startup error.
fn load_seed(path: &str) -> Result<Vec<Movie>> {
    match fs::read_to_string(path) {
        Ok(raw) => {
            serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!("Seed file {} not found; starting with an empty collection", path);
            Ok(Vec::new())
        }
        Err(err) => Err(err).with_context(|| format!("reading seed file {}", path)),
    }
}
