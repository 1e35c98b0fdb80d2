//! Subscriber setup for the binary: stderr plus a daily rolling log file.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Rolling log file name inside the log directory.
pub const LOG_FILE: &str = "NBAIConverter.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. When the log directory cannot be created only
/// the stderr layer is installed.
pub fn init(log_dir: &Path, verbose: bool) -> Option<WorkerGuard> {
    let default_level = if verbose { "debug" } else { "info" };
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    if let Err(e) = fs::create_dir_all(log_dir) {
        tracing_subscriber::registry().with(stderr_layer).init();
        tracing::warn!("Log directory {} unavailable: {e}", log_dir.display());
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
    Some(guard)
}
