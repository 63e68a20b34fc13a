//! hlsgrab - M3U8 Download Proxy
//!
//! Hexagonal Architecture:
//! - domain/: Pure types and status derivation (workspaces, output files)
//! - ports/: Trait definitions (workspace store, download executor)
//! - adapters/: Concrete implementations (filesystem, ffmpeg, HTTP API)
//! - application/: Download orchestration service
//! - config: Environment configuration
//!
//! A request hands an M3U8 URL to the service, which allocates an isolated
//! workspace directory, delegates the actual stream retrieval and muxing to
//! ffmpeg as a child process, and either reports the produced file or rolls
//! the workspace back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use adapters::ffmpeg::FfmpegExecutor;
pub use adapters::fs::FsWorkspaceStore;
pub use application::downloader::DownloadService;
pub use config::Config;
