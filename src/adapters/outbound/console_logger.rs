use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Writes domain messages to stdout/stderr, tagged with the command name.
pub struct ConsoleLogger {
    tag: &'static str,
}

impl ConsoleLogger {
    pub fn new(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl DomainLogger for ConsoleLogger {
    fn info(&self, msg: &str) { println!("[{}] {}", self.tag, msg); }
    fn warn(&self, msg: &str) { println!("[{}] WARN: {}", self.tag, msg); }
    fn error(&self, msg: &str) { eprintln!("[{}] ERROR: {}", self.tag, msg); }
}

/// Initialize a simple console-backed DomainLogger (useful as a fallback)
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(ConsoleLogger::new("locatebiome"))
}
