use crate::ports::executor::DownloadExecutor;
use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::process::Output;
use tokio::process::Command as TokioCommand;

/// ffmpeg child-process executor.
///
/// The binary is resolved through `PATH`. Arguments select a plain remux
/// (`-c copy` plus the ADTS-to-ASC bitstream filter HLS audio needs in an
/// mp4 container), overwrite of the target, and a 30 second socket timeout.
#[derive(Clone, Copy)]
pub struct FfmpegExecutor;

impl FfmpegExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DownloadExecutor for FfmpegExecutor {
    async fn run_stream_download(
        &self,
        source_url: &str,
        output_path: &Path,
    ) -> io::Result<Output> {
        TokioCommand::new("ffmpeg")
            .arg("-i")
            .arg(source_url)
            .arg("-c")
            .arg("copy")
            .arg("-bsf:a")
            .arg("aac_adtstoasc")
            .arg("-y")
            .arg("-timeout")
            .arg("30000000")
            .arg(output_path)
            .output()
            .await
    }

    async fn run_version_check(&self) -> io::Result<Output> {
        TokioCommand::new("ffmpeg").arg("-version").output().await
    }
}
