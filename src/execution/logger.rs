//! Log sink handed to the retry runner

use tracing::{debug, warn};

/// Receives the runner's progress messages
pub trait RunLogger: Send + Sync {
    fn debug(&self, message: &str);

    fn warn(&self, message: &str) {
        self.debug(message);
    }
}

/// Forwards messages to the global `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RunLogger for TracingLogger {
    fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}
