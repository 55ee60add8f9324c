//! Embedding path collection.
//!
//! Upstream preloads word embeddings before the first answer call. Each
//! collaborator may declare the embedding file it was trained against; this
//! use case gathers those declarations in a fixed order.

use super::answer_models::AnswerModels;
use std::path::{Path, PathBuf};

/// Collect declared embedding paths.
///
/// Order is span-copy generator, strategy selector, yes/no scorer, sequence
/// generator. Collaborators without a path are skipped; duplicates are kept.
/// Paths are not checked for existence.
pub fn collect_embedding_paths(models: &AnswerModels) -> Vec<PathBuf> {
    [
        models.span_copy.embedding_path(),
        models.selector.embedding_path(),
        models.yes_no.embedding_path(),
        models.sequence.embedding_path(),
    ]
    .into_iter()
    .flatten()
    .map(Path::to_path_buf)
    .collect()
}
