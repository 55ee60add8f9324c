//! Novelty-based span copier.

use super::lexical::{default_stop_words, novelty_marks};
use super::manifest::{read_manifest, resolve_embedding_path};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use synth_application::{
    EmbeddingPathSource, GenerationContext, LoadError, LoadableModel, SpanCopyGenerator,
};

pub const SPAN_COPY_MANIFEST: &str = "span_copy.config";

/// Manifest for [`NoveltySpanCopier`]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpanCopyManifest {
    pub w2v_path: Option<PathBuf>,
    pub stop_words: Vec<String>,
    /// Longest span ever copied
    pub max_words: usize,
}

impl Default for SpanCopyManifest {
    fn default() -> Self {
        Self {
            w2v_path: None,
            stop_words: default_stop_words(),
            max_words: 8,
        }
    }
}

/// Copies the longest run of premise words the question does not mention.
///
/// Words keep their premise casing; surrounding punctuation is dropped. Ties
/// go to the earliest run. Returns `""` when every premise word already
/// appears in the question.
#[derive(Debug, Clone)]
pub struct NoveltySpanCopier {
    manifest: SpanCopyManifest,
    embedding_path: Option<PathBuf>,
}

impl NoveltySpanCopier {
    pub fn new(manifest: SpanCopyManifest) -> Self {
        Self {
            manifest,
            embedding_path: None,
        }
    }
}

impl Default for NoveltySpanCopier {
    fn default() -> Self {
        Self::new(SpanCopyManifest::default())
    }
}

impl LoadableModel for NoveltySpanCopier {
    fn load(model_dir: &Path) -> Result<Self, LoadError> {
        let mut manifest: SpanCopyManifest = read_manifest(model_dir, SPAN_COPY_MANIFEST)?;
        let embedding_path = resolve_embedding_path(model_dir, manifest.w2v_path.take());
        Ok(Self {
            manifest,
            embedding_path,
        })
    }
}

impl EmbeddingPathSource for NoveltySpanCopier {
    fn embedding_path(&self) -> Option<&Path> {
        self.embedding_path.as_deref()
    }
}

impl SpanCopyGenerator for NoveltySpanCopier {
    fn generate(&self, premise: &str, ctx: &GenerationContext<'_>) -> String {
        let marks = novelty_marks(premise, ctx, &self.manifest.stop_words);

        let mut best: &[(&str, bool)] = &[];
        let mut start = 0;
        for end in 0..=marks.len() {
            let run_ends = end == marks.len() || !marks[end].1;
            if run_ends {
                if end - start > best.len() {
                    best = &marks[start..end];
                }
                start = end + 1;
            }
        }

        best.iter()
            .take(self.manifest.max_words)
            .map(|(word, _)| *word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
