use crate::domain::workspace::{FileEntry, WorkspaceHandle, WorkspaceSummary};
use crate::error::StoreError;
use crate::ports::workspaces::WorkspaceStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem-backed workspace store.
///
/// Each workspace is one directory named by its UUID under `root`. The root
/// is append-only with respect to new subdirectories, so concurrent
/// allocations never conflict.
#[derive(Debug, Clone)]
pub struct FsWorkspaceStore {
    root: PathBuf,
}

impl FsWorkspaceStore {
    /// Create a store over `root`, creating the directory if needed.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // Ids are UUIDs; anything else (separators, "..") must never resolve
    // to a path outside the root.
    fn id_is_safe(id: &str) -> bool {
        !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    async fn summarize(&self, id: &str, dir: &Path) -> Result<WorkspaceSummary, StoreError> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            files.push(FileEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
            });
        }

        Ok(WorkspaceSummary {
            id: id.to_string(),
            dir: dir.to_path_buf(),
            files,
        })
    }
}

#[async_trait]
impl WorkspaceStore for FsWorkspaceStore {
    async fn allocate(&self) -> Result<WorkspaceHandle, StoreError> {
        let id = Uuid::new_v4().to_string();
        let dir = self.root.join(&id);
        tokio::fs::create_dir_all(&dir).await?;
        tracing::debug!(workspace = %id, "allocated workspace");
        Ok(WorkspaceHandle { id, dir })
    }

    async fn remove(&self, handle: &WorkspaceHandle) -> Result<(), StoreError> {
        match tokio::fs::remove_dir_all(&handle.dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn list(&self) -> Result<Vec<WorkspaceSummary>, StoreError> {
        let mut workspaces = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.metadata().await?.is_dir() {
                continue;
            }
            let id = entry.file_name().to_string_lossy().into_owned();
            workspaces.push(self.summarize(&id, &entry.path()).await?);
        }
        Ok(workspaces)
    }

    async fn get(&self, id: &str) -> Result<WorkspaceSummary, StoreError> {
        if !Self::id_is_safe(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let dir = self.root.join(id);
        if !dir.is_dir() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.summarize(id, &dir).await
    }
}
