use tracing::Level;

/// Leveled logging capability consumed by the gate.
///
/// The gate never configures logging; it only emits through this trait and
/// asks it whether a level is enabled.
pub trait GateLogger: Send + Sync {
    /// Emit a message at the given level.
    fn log(&self, level: Level, message: &str);

    /// Whether messages at `level` would currently be emitted.
    fn enabled(&self, level: Level) -> bool;

    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}
