use super::AppState;
use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

/// Service description, tool diagnostic and usage map.
pub async fn root(State(service): State<AppState>) -> Json<Value> {
    let ffmpeg_available = service.tool_available().await;

    Json(json!({
        "message": "M3U8 Video Downloader Proxy",
        "status": "running",
        "ffmpeg_available": ffmpeg_available,
        "endpoints": {
            "download": "GET/POST /download?url=<m3u8_url> - Download a video into a new workspace",
            "status": "GET /download/<id>/status - Status of a single download",
            "downloads": "GET /downloads - List all downloads",
            "health": "GET /health - Liveness probe",
        },
    }))
}

/// Constant liveness payload.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
    }))
}
