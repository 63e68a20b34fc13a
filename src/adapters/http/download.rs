use super::error::HttpError;
use super::AppState;
use crate::domain::status::FileInfo;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub download_id: String,
    pub status: &'static str,
    pub message: &'static str,
    pub download_path: PathBuf,
    pub file_info: FileInfo,
}

/// Run a download synchronously: the response is sent only after the
/// external tool has exited and the workspace has been inspected.
pub async fn download(
    State(service): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<Json<DownloadResponse>, HttpError> {
    let url = params
        .url
        .ok_or_else(|| HttpError::BadRequest("URL parameter is required".to_string()))?;

    let receipt = service.download(&url).await?;
    Ok(Json(DownloadResponse {
        download_id: receipt.download_id,
        status: "completed",
        message: "Video downloaded successfully",
        download_path: receipt.download_path,
        file_info: receipt.file_info,
    }))
}
