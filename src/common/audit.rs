// Diagnostic sink for rejected mutations

use std::sync::Mutex;

use tracing::warn;

/// Receiver for the single human-readable line each rejected mutation emits.
///
/// Unconditional rejections use fixed literals ("Attempted to add a null
/// rating."); structural rejections use a stable prefix followed by detail.
/// Consumers should match fixed lines on equality and detailed lines on
/// prefix.
pub trait AuditSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Production sink: forwards each line to `tracing` at WARN level.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Capturing sink for tests.
#[derive(Debug, Default)]
pub struct RecordingAuditSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock_lines().clone()
    }

    pub fn last_line(&self) -> Option<String> {
        self.lock_lines().last().cloned()
    }

    // A panicking writer only poisons the mutex; the recorded lines stay
    // usable for the assertion that follows.
    fn lock_lines(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AuditSink for RecordingAuditSink {
    fn warn(&self, message: &str) {
        self.lock_lines().push(message.to_string());
    }
}
