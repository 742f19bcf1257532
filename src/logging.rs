//! Logging setup
//!
//! The terminal belongs to the TUI, so log output goes to a file. The filter
//! defaults to `info` and can be overridden with `RUST_LOG`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Opens (or creates) the log file in append mode, creating parent directories
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global tracing subscriber writing to `path`
pub fn init(path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()?;

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(())
}
