//! Tracing setup.
//!
//! The terminal UI owns stdout, so log records go to a file in the config
//! directory instead.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Default log file: `<config_dir>/colorwheel.log`.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join("colorwheel.log"))
}

/// Install the global subscriber writing to `path`.
///
/// `RUST_LOG` takes precedence; otherwise `debug` when `verbose`, else `info`.
pub fn init(verbose: bool, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("colorwheel.log");

        init(true, &path).unwrap();
        tracing::info!("logging initialized");

        assert!(path.exists());
        // The global subscriber is already taken
        assert!(init(false, &path).is_err());
    }

    #[test]
    fn test_default_log_path_is_in_config_dir() {
        // Headless environments may have no config directory at all
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("ColorWheel/colorwheel.log"));
        }
    }
}
