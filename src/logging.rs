//! Log output for the assistant.
//!
//! `ask` and `chat` call [`init_cli`]: plain text on stderr, nothing else.
//! `serve` calls [`init_production`] when `logging.json_dir` is configured,
//! which adds a daily JSON file next to the stderr output.
//!
//! Stdout carries reply bodies in every command, so no layer writes there.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// File name prefix of the rotated request logs.
const LOG_FILE_PREFIX: &str = "college-buddy.log";

/// Keeps the JSON file writer flushing; hold it until `serve` returns.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Install stderr and rotating JSON file logging for `serve`.
///
/// Files land in `logs_dir` as `college-buddy.log.YYYY-MM-DD`.
///
/// # Errors
///
/// Fails if `logs_dir` cannot be created or a subscriber is already set.
pub fn init_production(logs_dir: &Path, default_level: &str) -> anyhow::Result<LoggingGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("failed to create logs directory {}", logs_dir.display()))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX));

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(tracing_subscriber::fmt::layer().json().with_writer(file_writer))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(LoggingGuard { _guard: guard })
}

/// Install stderr logging for the interactive commands. Later calls keep
/// the first subscriber.
pub fn init_cli(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .try_init();
}

/// `RUST_LOG` if set, else the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
