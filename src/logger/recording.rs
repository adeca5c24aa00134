use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use tracing::Level;

use crate::traits::GateLogger;

/// Logger keeping every emitted message in memory (for testing/inspection).
///
/// Messages more verbose than `max_level` are dropped, the same way a real
/// subscriber filters them.
#[derive(Clone)]
pub struct RecordingLogger {
    max_level: Level,
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingLogger {
    pub fn new(max_level: Level) -> Self {
        Self {
            max_level,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All recorded `(level, message)` pairs in emission order.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for RecordingLogger {
    fn default() -> Self {
        Self::new(Level::TRACE)
    }
}

impl GateLogger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }

    fn enabled(&self, level: Level) -> bool {
        // tracing orders more verbose levels as greater
        level <= self.max_level
    }
}
