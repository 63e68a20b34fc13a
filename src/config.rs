//! Configuration for the download proxy.

use std::env;

/// Server and storage configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// Root directory for per-download workspaces
    pub download_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            addr: env::var("ADDR").unwrap_or_else(|_| String::from("0.0.0.0")),
            port: env::var("PORT").unwrap_or_else(|_| String::from("8000")),
            download_dir: env::var("DOWNLOAD_DIR").unwrap_or_else(|_| String::from("downloads")),
        }
    }
}
