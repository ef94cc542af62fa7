use crate::config::LoggingConfig;
use crate::domains::logger::{DomainLogger, FileLogger};
use std::sync::Arc;

/// Initialize the file logger and return a domain logger instance the application can inject.
pub fn init_file_logger(path: &str, level: &str) -> Result<Arc<dyn DomainLogger>, String> {
    FileLogger::init(path, level).map_err(|e| format!("Failed to initialize fast_log at {}: {}", path, e))?;
    Ok(Arc::new(FileLogger))
}

/// Pick the domain logger described by the logging section: file plus console when a
/// file is configured, console only otherwise.
pub fn logger_from_config(config: &LoggingConfig) -> Arc<dyn DomainLogger> {
    match &config.file {
        Some(path) => crate::adapters::outbound::init_combined_logger(path, &config.filter),
        None => crate::adapters::outbound::init_console_logger(),
    }
}
