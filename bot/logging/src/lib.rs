//! Structured logging for sorrel bots.
//!
//! Wraps `tracing` with an env-filtered ANSI console layer and a
//! daily-rotated NDJSON file layer, so command dispatch activity stays
//! grep-able after the fact.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber.
///
/// Writes NDJSON to `sorrel.log.YYYY-MM-DD` under `log_dir` and pretty output
/// to stdout. `level` is the fallback filter when `RUST_LOG` is unset.
/// Calling this twice is harmless; the second init is a no-op.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) -> Result<()> {
    std::fs::create_dir_all(&log_dir).context("failed to create log directory")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "sorrel.log");
    let file_layer = fmt::layer().json().with_writer(file_appender).with_ansi(false);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    Ok(())
}

/// Console-only variant for tests and short-lived tools.
pub fn init_console_logger(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
