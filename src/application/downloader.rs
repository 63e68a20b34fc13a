use crate::domain::status::{derive_status, output_file_name, FileInfo, StatusView};
use crate::domain::workspace::WorkspaceHandle;
use crate::error::DownloadError;
use crate::ports::executor::DownloadExecutor;
use crate::ports::workspaces::WorkspaceStore;
use chrono::Local;
use serde::Serialize;
use std::path::PathBuf;

/// Result of one successful download run.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadReceipt {
    pub download_id: String,
    pub download_path: PathBuf,
    pub file_info: FileInfo,
}

/// Orchestrates one download per request: allocate a workspace, hand the
/// heavy lifting to the executor, report the produced file or roll back.
///
/// Synchronous per request. No retry, no cancellation, no internal timeout;
/// the only suspension point is awaiting the child process.
pub struct DownloadService<S, E> {
    store: S,
    executor: E,
}

impl<S, E> DownloadService<S, E>
where
    S: WorkspaceStore,
    E: DownloadExecutor,
{
    pub fn new(store: S, executor: E) -> Self {
        Self { store, executor }
    }

    /// Run a download to completion. Blocks until the external tool exits.
    ///
    /// A download either fully succeeds (one valid output file in a retained
    /// workspace) or is fully rolled back (workspace removed before the
    /// error is returned). Failed attempts never accumulate as visible state.
    pub async fn download(&self, url: &str) -> Result<DownloadReceipt, DownloadError> {
        validate_source_url(url)?;

        let workspace = self.store.allocate().await?;
        match self.fetch_into(&workspace, url).await {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                if let Err(cleanup) = self.store.remove(&workspace).await {
                    // Must not mask the execution failure
                    tracing::warn!(workspace = %workspace.id, error = %cleanup, "rollback failed");
                }
                Err(err)
            }
        }
    }

    async fn fetch_into(
        &self,
        workspace: &WorkspaceHandle,
        url: &str,
    ) -> Result<DownloadReceipt, DownloadError> {
        let output_path = workspace.dir.join(output_file_name(&Local::now()));

        tracing::info!(workspace = %workspace.id, url, "starting stream download");
        let output = self
            .executor
            .run_stream_download(url, &output_path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    DownloadError::Execution("FFmpeg is not installed".to_string())
                }
                _ => DownloadError::Execution(format!("Failed to launch FFmpeg: {e}")),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = match stderr.trim() {
                "" => "Unknown error".to_string(),
                s => s.to_string(),
            };
            tracing::warn!(workspace = %workspace.id, code = ?output.status.code(), "ffmpeg exited non-zero");
            return Err(DownloadError::Execution(detail));
        }

        // Exit code zero alone is not success; the output file must exist.
        let metadata = tokio::fs::metadata(&output_path).await.map_err(|_| {
            DownloadError::Execution("Tool exited cleanly but produced no output file".to_string())
        })?;

        tracing::info!(workspace = %workspace.id, size = metadata.len(), "download completed");
        Ok(DownloadReceipt {
            download_id: workspace.id.clone(),
            download_path: workspace.dir.clone(),
            file_info: FileInfo {
                file_path: output_path,
                file_size: metadata.len(),
            },
        })
    }

    /// Current status of a single download, derived from its directory.
    pub async fn status(&self, id: &str) -> Result<StatusView, DownloadError> {
        let summary = self.store.get(id).await?;
        Ok(derive_status(&summary))
    }

    /// Status of every workspace under the download root.
    pub async fn list_all(&self) -> Result<Vec<StatusView>, DownloadError> {
        Ok(self.store.list().await?.iter().map(derive_status).collect())
    }

    /// Whether the external tool is present and runnable. Diagnostic only.
    pub async fn tool_available(&self) -> bool {
        match self.executor.run_version_check().await {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }
}

fn validate_source_url(url: &str) -> Result<(), DownloadError> {
    if url.trim().is_empty() {
        return Err(DownloadError::InvalidUrl(
            "URL parameter is required".to_string(),
        ));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(DownloadError::InvalidUrl("Invalid URL format".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fs::FsWorkspaceStore;
    use crate::domain::status::DownloadState;
    use crate::ports::executor::MockDownloadExecutor;
    use std::process::Output;
    use tempfile::{tempdir, TempDir};

    fn exit_with(code: i32, stderr: &str) -> Output {
        use std::os::unix::process::ExitStatusExt;
        Output {
            status: std::process::ExitStatus::from_raw(code << 8),
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    async fn service_with(
        executor: MockDownloadExecutor,
    ) -> (
        TempDir,
        DownloadService<FsWorkspaceStore, MockDownloadExecutor>,
    ) {
        let dir = tempdir().unwrap();
        let store = FsWorkspaceStore::new(dir.path().join("downloads"))
            .await
            .unwrap();
        (dir, DownloadService::new(store, executor))
    }

    fn workspace_count(root: &std::path::Path) -> usize {
        match std::fs::read_dir(root) {
            Ok(entries) => entries.filter_map(Result::ok).count(),
            Err(_) => 0,
        }
    }

    #[tokio::test]
    async fn test_successful_download_reports_file() {
        let mut executor = MockDownloadExecutor::new();
        executor
            .expect_run_stream_download()
            .withf(|url, output_path| {
                url == "https://example.com/good.m3u8"
                    && crate::domain::status::is_output_name(
                        &output_path.file_name().unwrap().to_string_lossy(),
                    )
            })
            .times(1)
            .returning(|_, output_path| {
                std::fs::write(output_path, vec![0u8; 1000]).unwrap();
                Ok(exit_with(0, ""))
            });

        let (dir, service) = service_with(executor).await;
        let receipt = service
            .download("https://example.com/good.m3u8")
            .await
            .unwrap();

        assert_eq!(receipt.file_info.file_size, 1000);
        assert!(receipt.file_info.file_path.is_file());
        assert_eq!(
            receipt.file_info.file_path.metadata().unwrap().len(),
            receipt.file_info.file_size
        );
        assert!(receipt.download_path.ends_with(&receipt.download_id));
        assert_eq!(workspace_count(&dir.path().join("downloads")), 1);

        // The retained workspace is visible as completed
        let view = service.status(&receipt.download_id).await.unwrap();
        assert_eq!(view.status, DownloadState::Completed);
        assert_eq!(view.file_info.unwrap().file_size, 1000);
    }

    #[tokio::test]
    async fn test_failed_download_rolls_back_workspace() {
        let mut executor = MockDownloadExecutor::new();
        executor
            .expect_run_stream_download()
            .times(1)
            .returning(|_, _| Ok(exit_with(1, "invalid playlist")));

        let (dir, service) = service_with(executor).await;
        let err = service
            .download("https://example.com/bad.m3u8")
            .await
            .unwrap_err();

        match err {
            DownloadError::Execution(detail) => assert!(detail.contains("invalid playlist")),
            other => panic!("expected Execution error, got {other:?}"),
        }
        assert_eq!(workspace_count(&dir.path().join("downloads")), 0);
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clean_exit_without_output_is_a_failure() {
        let mut executor = MockDownloadExecutor::new();
        executor
            .expect_run_stream_download()
            .times(1)
            .returning(|_, _| Ok(exit_with(0, "")));

        let (dir, service) = service_with(executor).await;
        let err = service
            .download("https://example.com/empty.m3u8")
            .await
            .unwrap_err();

        match err {
            DownloadError::Execution(detail) => assert!(detail.contains("no output file")),
            other => panic!("expected Execution error, got {other:?}"),
        }
        assert_eq!(workspace_count(&dir.path().join("downloads")), 0);
    }

    #[tokio::test]
    async fn test_missing_tool_is_reported_and_rolled_back() {
        let mut executor = MockDownloadExecutor::new();
        executor.expect_run_stream_download().returning(|_, _| {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            ))
        });

        let (dir, service) = service_with(executor).await;
        let err = service
            .download("https://example.com/playlist.m3u8")
            .await
            .unwrap_err();

        match err {
            DownloadError::Execution(detail) => assert!(detail.contains("not installed")),
            other => panic!("expected Execution error, got {other:?}"),
        }
        assert_eq!(workspace_count(&dir.path().join("downloads")), 0);
    }

    #[tokio::test]
    async fn test_invalid_url_rejected_before_allocation() {
        let mut executor = MockDownloadExecutor::new();
        executor.expect_run_stream_download().never();

        let (dir, service) = service_with(executor).await;

        for url in ["", "   ", "ftp://example.com/a.m3u8", "not a url"] {
            assert!(matches!(
                service.download(url).await,
                Err(DownloadError::InvalidUrl(_))
            ));
        }
        assert_eq!(workspace_count(&dir.path().join("downloads")), 0);
    }

    #[tokio::test]
    async fn test_status_of_unknown_id_is_not_found() {
        let (_dir, service) = service_with(MockDownloadExecutor::new()).await;

        assert!(matches!(
            service.status("missing-id").await,
            Err(DownloadError::Store(crate::error::StoreError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_tool_availability_probe() {
        let mut executor = MockDownloadExecutor::new();
        executor
            .expect_run_version_check()
            .times(1)
            .returning(|| Ok(exit_with(0, "")));
        let (_dir, service) = service_with(executor).await;
        assert!(service.tool_available().await);

        let mut executor = MockDownloadExecutor::new();
        executor.expect_run_version_check().returning(|| {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            ))
        });
        let (_dir, service) = service_with(executor).await;
        assert!(!service.tool_available().await);
    }
}
