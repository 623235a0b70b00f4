//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so logs only go to a file. Without a log
//! file no subscriber is installed and `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is unset.
const DEFAULT_LEVEL: &str = "info";

/// Install a file-backed subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    );

    let _ = subscriber.try_init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
