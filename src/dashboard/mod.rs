//! Dashboard — Axum web server for both calculators.
//!
//! Serves a JSON API over the calculator state and two self-contained HTML
//! pages (mining selector at `/`, valuation calculator at `/investing`).
//! CORS enabled for local development.

pub mod routes;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    response::Html,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use routes::AppState;

/// The embedded pages (compiled into the binary).
const MINING_HTML: &str = include_str!("templates/mining.html");
const INVESTING_HTML: &str = include_str!("templates/investing.html");

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(state: AppState, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind dashboard address {addr}"))?;
    info!(%addr, "Dashboard server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Dashboard server error")?;

    Ok(())
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static("*"))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Mining API
        .route("/api/miners", get(routes::get_miners))
        .route("/api/miner", get(routes::get_miner))
        .route("/api/miner/select", post(routes::select_miner))
        .route("/api/miner/edit", post(routes::edit_miner))
        // Valuation API
        .route("/api/valuation", get(routes::get_valuation))
        .route("/api/valuation/presets", get(routes::get_presets))
        .route("/api/valuation/preset", post(routes::load_preset))
        .route("/api/valuation/input", post(routes::edit_valuation))
        .route("/api/valuation/compute", get(routes::compute_valuation))
        .route("/health", get(routes::health))
        // Pages
        .route("/", get(serve_mining))
        .route("/investing", get(serve_investing))
        .layer(cors)
        .with_state(state)
}

async fn serve_mining() -> Html<&'static str> {
    Html(MINING_HTML)
}

async fn serve_investing() -> Html<&'static str> {
    Html(INVESTING_HTML)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
