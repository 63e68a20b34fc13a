//! Adapters - Concrete implementations of the ports.

pub mod ffmpeg;
pub mod fs;
pub mod http;
