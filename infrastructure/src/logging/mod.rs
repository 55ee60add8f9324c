//! Logging infrastructure: structured answer tracing.
//!
//! Provides [`JsonlAnswerLogger`], a JSONL file writer that implements
//! the [`AnswerLogger`](synth_application::AnswerLogger) port.

mod answer_log;

pub use answer_log::JsonlAnswerLogger;
