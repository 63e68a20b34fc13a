use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::process::Output;

/// External media tool invocation.
///
/// The tool is opaque: the contract is its argument list, exit code and
/// captured output. Blocking on the child process is the only suspension
/// point in a download request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DownloadExecutor: Send + Sync {
    /// Fetch the stream at `source_url`, reassemble and mux it into
    /// `output_path`. A single invocation is the entire attempt.
    async fn run_stream_download(&self, source_url: &str, output_path: &Path)
        -> io::Result<Output>;

    /// Probe whether the tool is present and runnable.
    async fn run_version_check(&self) -> io::Result<Output>;
}
