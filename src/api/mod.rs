//! REST API for production plans.
//!
//! Provides one endpoint:
//! - `POST /productionplan`: load, fuels, and fleet in; per-plant power out

mod handlers;
pub mod types;
pub mod validation;

use std::net::SocketAddr;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use tracing::info;

use crate::config::ServerConfig;

/// Builds the axum router with all API routes.
///
/// The router holds no state: every request carries its own fleet.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/productionplan", post(handlers::post_production_plan))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an I/O error if the listener cannot bind to `addr` or the server
/// fails while running.
pub async fn serve(config: &ServerConfig, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
