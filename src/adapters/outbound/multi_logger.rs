use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards every message to a primary logger and, when present, a secondary one.
pub struct MultiLogger {
    primary: Arc<dyn DomainLogger>,
    secondary: Option<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(primary: Arc<dyn DomainLogger>, secondary: Option<Arc<dyn DomainLogger>>) -> Self {
        Self { primary, secondary }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.primary.info(msg);
        if let Some(sec) = &self.secondary {
            sec.info(msg);
        }
    }

    fn warn(&self, msg: &str) {
        self.primary.warn(msg);
        if let Some(sec) = &self.secondary {
            sec.warn(msg);
        }
    }

    fn error(&self, msg: &str) {
        self.primary.error(msg);
        if let Some(sec) = &self.secondary {
            sec.error(msg);
        }
    }
}

/// File logger with console as secondary; console alone if the file cannot be opened.
pub fn init_combined_logger(path: &str, level: &str) -> Arc<dyn DomainLogger> {
    let console = crate::adapters::outbound::init_console_logger();
    match crate::adapters::outbound::file_logger::init_file_logger(path, level) {
        Ok(file_logger) => Arc::new(MultiLogger::new(file_logger, Some(console))) as Arc<dyn DomainLogger>,
        Err(e) => {
            console.warn(&e);
            console
        }
    }
}
