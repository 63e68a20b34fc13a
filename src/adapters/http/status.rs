use super::error::HttpError;
use super::AppState;
use crate::domain::status::StatusView;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

/// Status of a single download, derived from its workspace directory.
pub async fn status(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusView>, HttpError> {
    Ok(Json(service.status(&id).await?))
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub downloads: Vec<StatusView>,
    pub count: usize,
}

/// One status entry per existing workspace.
pub async fn list_all(State(service): State<AppState>) -> Result<Json<ListResponse>, HttpError> {
    let downloads = service.list_all().await?;
    let count = downloads.len();
    Ok(Json(ListResponse { downloads, count }))
}
