//! HTTP inbound adapter.
//!
//! Exposes the download proxy over a small JSON API:
//! download, per-id status, listing, health and a root usage payload.

pub mod download;
pub mod error;
pub mod status;
pub mod system;

use crate::adapters::ffmpeg::FfmpegExecutor;
use crate::adapters::fs::FsWorkspaceStore;
use crate::application::downloader::DownloadService;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers.
pub type AppState = Arc<DownloadService<FsWorkspaceStore, FfmpegExecutor>>;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route(
            "/download",
            get(download::download).post(download::download),
        )
        .route("/download/:id/status", get(status::status))
        .route("/downloads", get(status::list_all))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
