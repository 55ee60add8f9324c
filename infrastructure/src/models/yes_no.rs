//! Overlap-based yes/no scorer.

use super::lexical::{cosine, default_stop_words, question_terms};
use super::manifest::{read_manifest, resolve_embedding_path};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use synth_application::{
    EmbeddingPathSource, GenerationContext, LoadError, LoadableModel, YesNoScorer,
};

pub const YES_NO_MANIFEST: &str = "yes_no.config";

/// Manifest for [`OverlapYesNoScorer`]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct YesNoManifest {
    pub w2v_path: Option<PathBuf>,
    /// Probability returned when there is nothing to compare
    pub prior: f64,
    /// Words that flip the polarity of a premise
    pub negations: Vec<String>,
    pub stop_words: Vec<String>,
    /// Minimum cosine similarity for an embedding-based match
    pub similarity_threshold: f32,
}

impl Default for YesNoManifest {
    fn default() -> Self {
        Self {
            w2v_path: None,
            prior: 0.5,
            negations: ["not", "no", "never", "none", "nobody", "nothing", "neither", "nor"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            stop_words: default_stop_words(),
            similarity_threshold: 0.8,
        }
    }
}

/// Scores how well the premise supports the question.
///
/// The probability is the share of question content words found in the
/// premise, either literally or through an embedding neighbour. A negation in
/// the premise that the question does not share inverts the score.
#[derive(Debug, Clone)]
pub struct OverlapYesNoScorer {
    manifest: YesNoManifest,
    embedding_path: Option<PathBuf>,
}

impl OverlapYesNoScorer {
    pub fn new(manifest: YesNoManifest) -> Self {
        Self {
            manifest,
            embedding_path: None,
        }
    }

    fn is_content(&self, token: &str) -> bool {
        !self.manifest.stop_words.iter().any(|w| w == token)
            && !self.manifest.negations.iter().any(|w| w == token)
    }

    fn matches(&self, term: &str, premise: &HashSet<String>, ctx: &GenerationContext<'_>) -> bool {
        if premise.contains(term) {
            return true;
        }
        let Some(term_vec) = ctx.embeddings.vector(term) else {
            return false;
        };
        premise.iter().any(|word| {
            ctx.embeddings
                .vector(word)
                .is_some_and(|v| cosine(term_vec, v) >= self.manifest.similarity_threshold)
        })
    }

    fn negated(&self, tokens: &HashSet<String>) -> bool {
        self.manifest.negations.iter().any(|n| tokens.contains(n))
    }
}

impl Default for OverlapYesNoScorer {
    fn default() -> Self {
        Self::new(YesNoManifest::default())
    }
}

impl LoadableModel for OverlapYesNoScorer {
    fn load(model_dir: &Path) -> Result<Self, LoadError> {
        let mut manifest: YesNoManifest = read_manifest(model_dir, YES_NO_MANIFEST)?;
        let embedding_path = resolve_embedding_path(model_dir, manifest.w2v_path.take());
        Ok(Self {
            manifest,
            embedding_path,
        })
    }
}

impl EmbeddingPathSource for OverlapYesNoScorer {
    fn embedding_path(&self) -> Option<&Path> {
        self.embedding_path.as_deref()
    }
}

impl YesNoScorer for OverlapYesNoScorer {
    fn score(&self, premises: &[String], ctx: &GenerationContext<'_>) -> f64 {
        let Some(premise) = premises.first() else {
            return self.manifest.prior;
        };

        let question = question_terms(ctx);
        let terms: Vec<&String> = question.iter().filter(|t| self.is_content(t)).collect();
        if terms.is_empty() {
            return self.manifest.prior;
        }

        let premise_tokens: HashSet<String> = ctx.text.tokenize(premise).into_iter().collect();
        let matched = terms
            .iter()
            .filter(|t| self.matches(t, &premise_tokens, ctx))
            .count();
        let overlap = matched as f64 / terms.len() as f64;

        if self.negated(&premise_tokens) != self.negated(&question) {
            1.0 - overlap
        } else {
            overlap
        }
    }
}
