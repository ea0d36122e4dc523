//! Tracing setup: stderr by default, a non-blocking file appender when configured.
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Installs the global subscriber.
///
/// The returned guard flushes the log file when dropped, so keep it alive
/// until the program exits.
pub fn init(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let guard = match &config.log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            builder.with_ansi(false).with_writer(writer).init();
            tracing::info!(path = %path.display(), "logging to file");
            Some(guard)
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            None
        }
    };

    tracing::debug!(filter = %config.log_filter, "logging initialized");
    Ok(guard)
}

/// Appends to `path`, creating its directory first. Writes happen on a worker thread.
pub fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
