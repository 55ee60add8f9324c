//! Collaborator ports
//!
//! Defines one trait per capability the aggregator consumes. Implementations
//! (the pre-trained models) live in the infrastructure layer and are loaded
//! once at startup; after that they are read-only and shared across calls.

use super::services::{EmbeddingServices, TextServices};
use std::path::{Path, PathBuf};
use synth_domain::{Question, StrategyId};
use thiserror::Error;

/// Errors raised while loading a collaborator from its model directory
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Missing model resource: {}", .path.display())]
    MissingResource { path: PathBuf },

    #[error("Malformed model resource {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything a collaborator may consult besides the premise itself
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub question: &'a Question,
    pub text: &'a dyn TextServices,
    pub embeddings: &'a dyn EmbeddingServices,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        question: &'a Question,
        text: &'a dyn TextServices,
        embeddings: &'a dyn EmbeddingServices,
    ) -> Self {
        Self {
            question,
            text,
            embeddings,
        }
    }
}

/// A collaborator that can be loaded from a model directory
pub trait LoadableModel: Sized {
    /// Load the model, failing if required resources are missing or malformed
    fn load(model_dir: &Path) -> Result<Self, LoadError>;
}

/// Declares the word-embedding file a collaborator was trained against
pub trait EmbeddingPathSource {
    /// Path of the embedding resource, if the model uses one
    fn embedding_path(&self) -> Option<&Path> {
        None
    }
}

/// Chooses the answer strategy for a premise/question pair
pub trait StrategySelector: EmbeddingPathSource + Send + Sync {
    fn select(&self, premises: &[String], ctx: &GenerationContext<'_>) -> StrategyId;
}

/// Probability that the answer to the question is affirmative
pub trait YesNoScorer: EmbeddingPathSource + Send + Sync {
    fn score(&self, premises: &[String], ctx: &GenerationContext<'_>) -> f64;
}

/// Extracts an answer by copying words out of the premise
pub trait SpanCopyGenerator: EmbeddingPathSource + Send + Sync {
    fn generate(&self, premise: &str, ctx: &GenerationContext<'_>) -> String;
}

/// Produces answer text unit by unit
pub trait SequenceGenerator: EmbeddingPathSource + Send + Sync {
    fn generate(&self, premise: &str, ctx: &GenerationContext<'_>) -> String;
}
