//! HTTP surface: router, handlers and error responses

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ErrorBody;
pub use state::AppState;

use crate::utils::config::AppSettings;
use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/video-info",
            post(handlers::video_info).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/download",
            get(handlers::download).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(state: AppState, settings: &AppSettings) -> Result<()> {
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("HTTP server error")
}
