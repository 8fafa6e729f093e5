use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under the `products_api` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "products_api", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "products_api", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "products_api", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "products_api", "{}", message);
    }
}
