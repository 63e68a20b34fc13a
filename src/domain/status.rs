//! Status derivation over workspace contents.
//!
//! A download has no stored state machine. Its status is a pure function of
//! what the workspace directory currently contains: an output file matching
//! the `video_<timestamp>.<ext>` pattern means completed, anything else
//! means the executor has not (yet) produced a result.

use super::workspace::WorkspaceSummary;
use chrono::{DateTime, Local};
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;

static OUTPUT_NAME: OnceLock<Regex> = OnceLock::new();

fn output_name_pattern() -> &'static Regex {
    OUTPUT_NAME.get_or_init(|| {
        Regex::new(r"^video_\d{8}_\d{6}\.[A-Za-z0-9]+$").expect("valid output name pattern")
    })
}

/// Build the output file name for a download started at `at`.
///
/// Timestamp resolution is one second. Two downloads starting within the
/// same second in the same directory would collide; workspaces are distinct
/// directories, so in practice they never share one.
pub fn output_file_name(at: &DateTime<Local>) -> String {
    format!("video_{}.mp4", at.format("%Y%m%d_%H%M%S"))
}

/// Whether a file name is a recognizable download output.
pub fn is_output_name(name: &str) -> bool {
    output_name_pattern().is_match(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadState {
    Completed,
    InProgress,
}

/// Path and size of a produced output file.
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub file_path: PathBuf,
    pub file_size: u64,
}

/// Derived, on-demand representation of a download's completion state.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub download_id: String,
    pub status: DownloadState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
}

/// Derive the status view for a workspace from its current contents.
pub fn derive_status(summary: &WorkspaceSummary) -> StatusView {
    match summary.files.iter().find(|f| is_output_name(&f.name)) {
        Some(output) => StatusView {
            download_id: summary.id.clone(),
            status: DownloadState::Completed,
            file_info: Some(FileInfo {
                file_path: summary.dir.join(&output.name),
                file_size: output.size,
            }),
        },
        None => StatusView {
            download_id: summary.id.clone(),
            status: DownloadState::InProgress,
            file_info: None,
        },
    }
}
