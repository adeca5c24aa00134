use tracing::Level;

use crate::traits::GateLogger;

/// Logger forwarding to `tracing` events under the `feature_gate` target.
///
/// Whatever subscriber the host installed decides what is emitted; the
/// debug-level check follows that subscriber's filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl GateLogger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "feature_gate", "{}", message),
            Level::WARN => tracing::warn!(target: "feature_gate", "{}", message),
            Level::INFO => tracing::info!(target: "feature_gate", "{}", message),
            Level::DEBUG => tracing::debug!(target: "feature_gate", "{}", message),
            _ => tracing::trace!(target: "feature_gate", "{}", message),
        }
    }

    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::ERROR => tracing::enabled!(target: "feature_gate", Level::ERROR),
            Level::WARN => tracing::enabled!(target: "feature_gate", Level::WARN),
            Level::INFO => tracing::enabled!(target: "feature_gate", Level::INFO),
            Level::DEBUG => tracing::enabled!(target: "feature_gate", Level::DEBUG),
            _ => tracing::enabled!(target: "feature_gate", Level::TRACE),
        }
    }
}
