//! Tracing subscriber setup.
//!
//! Events go to stdout and to a daily-rotated log file. The file writer is
//! non-blocking; keep the returned [`WorkerGuard`] alive until shutdown or
//! buffered lines are lost.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file name prefix; files are named `catalog-search.<date>.log`.
const LOG_FILE_PREFIX: &str = "catalog-search";
/// One week of daily files.
const MAX_LOG_FILES: usize = 7;

/// Directives applied on top of `RUST_LOG`.
const DEFAULT_DIRECTIVES: [&str; 2] = ["catalog_search=info", "tower_http=info"];

/// Build the rolling file appender for `log_dir`, creating it if needed.
pub fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
}

fn env_filter() -> EnvFilter {
    DEFAULT_DIRECTIVES
        .iter()
        .filter_map(|d| d.parse().ok())
        .fold(EnvFilter::from_default_env(), |filter, directive| {
            filter.add_directive(directive)
        })
}

/// Install the global subscriber: stdout plus a rolling file in `log_dir`.
pub fn init(log_dir: &Path) -> Result<WorkerGuard, InitError> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(log_dir)?);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}
