//! Application layer for answer-synth
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger},
    collaborators::{
        EmbeddingPathSource, GenerationContext, LoadError, LoadableModel, SequenceGenerator,
        SpanCopyGenerator, StrategySelector, YesNoScorer,
    },
    services::{EmbeddingServices, TextServices},
};
pub use use_cases::answer_batch::{AnswerBatchUseCase, AnswerRequest, BatchError};
pub use use_cases::answer_models::AnswerModels;
pub use use_cases::build_answer::AnswerAggregator;
pub use use_cases::embedding_paths::collect_embedding_paths;
