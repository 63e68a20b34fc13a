//! Server binary.
//!
//! Wires up the filesystem workspace store, the ffmpeg executor and the
//! HTTP API, then serves until killed.

use hlsgrab::adapters::http;
use hlsgrab::application::downloader::DownloadService;
use hlsgrab::config::Config;
use hlsgrab::{FfmpegExecutor, FsWorkspaceStore};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::fmt::init();

    let store = match FsWorkspaceStore::new(&config.download_dir).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "Failed to prepare download root {}: {:?}",
                config.download_dir, e
            );
            std::process::exit(1);
        }
    };

    let service = Arc::new(DownloadService::new(store, FfmpegExecutor::new()));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.addr, config.port))
        .await
        .expect("Failed to bind TCP listener");
    println!("Listening at {}:{}", config.addr, config.port);
    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
