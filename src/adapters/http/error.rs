//! HTTP error type and mappings from the crate error taxonomy.

use crate::error::{DownloadError, StoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// No workspace exists for the referenced id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or malformed request parameter.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The external tool failed; carries its diagnostic output.
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    /// Storage or other internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::DownloadFailed(_) | HttpError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DownloadError> for HttpError {
    fn from(err: DownloadError) -> Self {
        match err {
            DownloadError::InvalidUrl(msg) => HttpError::BadRequest(msg),
            DownloadError::Store(StoreError::NotFound(id)) => {
                HttpError::NotFound(format!("download {id}"))
            }
            DownloadError::Store(StoreError::Io(e)) => HttpError::Internal(e.to_string()),
            DownloadError::Execution(detail) => HttpError::DownloadFailed(detail),
        }
    }
}
