mod config;
mod error;
mod handlers;

use std::sync::Arc;

use axum::{routing::post, Router};
use config::Config;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state for every handler: just the static config this process
/// started with.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/commit-graph", post(handlers::commit_graph))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "commit-graph-server listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
