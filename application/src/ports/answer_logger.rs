//! Port for structured answer tracing.
//!
//! Defines the [`AnswerLogger`] trait for recording what happened during an
//! answer call (strategy decisions, discarded empty generations, the final
//! answer set) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable trace (JSONL) that can be replayed or analysed later.

use serde_json::Value;

/// A structured answer event for logging.
pub struct AnswerEvent {
    /// Event type identifier (e.g., "strategy_selected", "answer_built").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AnswerEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging answer events to a structured log.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// write failures.
pub trait AnswerLogger: Send + Sync {
    /// Record an answer event.
    fn log(&self, event: AnswerEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAnswerLogger;

impl AnswerLogger for NoAnswerLogger {
    fn log(&self, _event: AnswerEvent) {}
}
