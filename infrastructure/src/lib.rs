//! Infrastructure layer for answer-synth
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading, language
//! resources, the word-embedding store, baseline answer models and the
//! JSONL answer log.

pub mod config;
pub mod embeddings;
pub mod language;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBatchConfig, FileConfig, FileLanguageConfig,
    FileLogConfig, FileModelsConfig, FileOutputConfig,
};
pub use embeddings::{EmbeddingError, InMemoryEmbeddings};
pub use language::LanguageResources;
pub use logging::JsonlAnswerLogger;
pub use models::{
    ExtractiveSequenceGenerator, KeywordStrategySelector, NoveltySpanCopier, OverlapYesNoScorer,
    load_answer_models,
};
