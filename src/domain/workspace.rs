use serde::Serialize;
use std::path::PathBuf;

/// Handle to a freshly allocated workspace.
///
/// The id doubles as the directory name under the download root and as the
/// external identifier returned to callers.
#[derive(Debug, Clone)]
pub struct WorkspaceHandle {
    pub id: String,
    pub dir: PathBuf,
}

/// One file inside a workspace directory.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

/// On-demand view of a workspace directory.
///
/// The directory contents ARE the workspace state; there is no separate
/// metadata record anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceSummary {
    pub id: String,
    pub dir: PathBuf,
    pub files: Vec<FileEntry>,
}
