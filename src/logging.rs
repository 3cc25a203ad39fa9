use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// `<data_local_dir>/course-feedback/course-feedback.log`, or the current
/// directory when the platform has no data dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("course-feedback")
        .join("course-feedback.log")
}

fn env_filter(config: &LoggingConfig, override_level: Option<&str>) -> EnvFilter {
    // RUST_LOG wins over both the flag and the config file
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(override_level.unwrap_or(&config.level)))
}

/// Initialize tracing into a log file.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
/// Returns the path being written.
pub fn init_file_tracing(config: &LoggingConfig, override_level: Option<&str>) -> io::Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter(config, override_level))
        .with(file_layer)
        .init();

    Ok(path)
}

/// Initialize tracing to stderr, for the non-interactive commands.
pub fn init_stderr_tracing(config: &LoggingConfig, override_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, override_level))
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .init();
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
