//! Port for the per-run execution log.
//!
//! Defines the [`ExecutionLogger`] trait for recording crew events (task
//! start/finish, failures, timings) to a log file dedicated to one run.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages, while this port captures what the crew did.

use serde_json::Value;

/// A structured execution event.
pub struct ExecutionEvent {
    /// Event type identifier (e.g., "task_started", "task_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExecutionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging execution events.
///
/// `log` is synchronous and non-fallible; logging failures never interrupt
/// a run.
pub trait ExecutionLogger: Send + Sync {
    fn log(&self, event: ExecutionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExecutionLogger;

impl ExecutionLogger for NoExecutionLogger {
    fn log(&self, _event: ExecutionEvent) {}
}
