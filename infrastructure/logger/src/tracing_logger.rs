use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "estoque", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "estoque", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "estoque", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "estoque", "{}", message);
    }
}
