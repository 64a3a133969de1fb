//! Log setup

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize tracing when `RUST_LOG` is set.
///
/// The TUI owns stdout, so logs go to a file under the platform state
/// directory instead. Without `RUST_LOG` nothing is installed.
pub fn init() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let Some(dir) = dirs::state_dir().or_else(dirs::cache_dir) else {
        return Ok(());
    };
    let log_dir = dir.join("termsplash");
    fs::create_dir_all(&log_dir).context("failed to create log directory")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("termsplash.log"))
        .context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
