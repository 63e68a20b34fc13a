use crate::domain::workspace::{WorkspaceHandle, WorkspaceSummary};
use crate::error::StoreError;
use async_trait::async_trait;

/// Directory-per-download storage.
///
/// Every workspace occupies its own subdirectory under a shared root; no
/// two operations ever write into the same workspace, so the store needs
/// no locking.
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Allocate a fresh workspace: generate a unique id and create the
    /// corresponding directory.
    async fn allocate(&self) -> Result<WorkspaceHandle, StoreError>;

    /// Delete a workspace directory recursively. Idempotent: a missing
    /// directory is not an error.
    async fn remove(&self, handle: &WorkspaceHandle) -> Result<(), StoreError>;

    /// Enumerate all workspaces under the root, filesystem order.
    async fn list(&self) -> Result<Vec<WorkspaceSummary>, StoreError>;

    /// Look up a single workspace by id.
    async fn get(&self, id: &str) -> Result<WorkspaceSummary, StoreError>;
}
