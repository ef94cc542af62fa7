use chrono::Utc;
use log::{error as log_error, info as log_info, warn as log_warn};
use std::str::FromStr;
use std::sync::Arc;

/// Domain-level logging port (Hexagonal port).
/// Non-fallible from the domain perspective; the locate service reports every outcome through it.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// A file-based adapter using `fast_log` for file writing.
pub struct FileLogger;

impl FileLogger {
    /// Install `fast_log` as the global `log` backend, writing to `path`.
    /// `level` is a `log` level name such as `info` or `debug`; unknown names fall back to `info`.
    pub fn init(path: &str, level: &str) -> Result<(), Box<dyn std::error::Error>> {
        let level = log::LevelFilter::from_str(level).unwrap_or(log::LevelFilter::Info);
        fast_log::init(
            fast_log::config::Config::new()
                .file(path)
                .level(level),
        )?;
        Ok(())
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log_info!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn warn(&self, msg: &str) {
        log_warn!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn error(&self, msg: &str) {
        log_error!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
}
