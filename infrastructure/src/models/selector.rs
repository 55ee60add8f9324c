//! Keyword-driven strategy selector.

use super::manifest::{read_manifest, resolve_embedding_path};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use synth_application::{
    EmbeddingPathSource, GenerationContext, LoadError, LoadableModel, StrategySelector,
};
use synth_domain::StrategyId;

pub const SELECTOR_MANIFEST: &str = "strategy_selector.config";

/// Manifest for [`KeywordStrategySelector`]
///
/// ```json
/// {
///   "w2v_path": "w2v.txt",
///   "yes_no_openers": ["is", "are", "do", "does", "can"],
///   "digit_markers": ["how many", "how much", "what year"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorManifest {
    pub w2v_path: Option<PathBuf>,
    /// First words that mark a yes/no question
    pub yes_no_openers: Vec<String>,
    /// Phrases that ask for a number
    pub digit_markers: Vec<String>,
}

impl Default for SelectorManifest {
    fn default() -> Self {
        Self {
            w2v_path: None,
            yes_no_openers: [
                "is", "are", "was", "were", "am", "do", "does", "did", "can", "could", "will",
                "would", "shall", "should", "has", "have", "had", "may", "must",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect(),
            digit_markers: ["how many", "how much", "how old", "what year", "what number"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

/// Picks a strategy from the shape of the question.
///
/// Rules, first match wins:
/// 1. question opens with a yes/no auxiliary → `YesNo`
/// 2. question contains a digit marker phrase → `DigitFallback`
/// 3. no premise to copy from → `SequenceGen`
/// 4. otherwise → `SpanCopy`
#[derive(Debug, Clone)]
pub struct KeywordStrategySelector {
    manifest: SelectorManifest,
    embedding_path: Option<PathBuf>,
}

impl KeywordStrategySelector {
    pub fn new(manifest: SelectorManifest) -> Self {
        Self {
            manifest,
            embedding_path: None,
        }
    }

    fn opens_yes_no(&self, tokens: &[String]) -> bool {
        tokens
            .first()
            .is_some_and(|first| self.manifest.yes_no_openers.contains(first))
    }

    fn asks_for_number(&self, tokens: &[String]) -> bool {
        let padded = format!(" {} ", tokens.join(" "));
        self.manifest
            .digit_markers
            .iter()
            .any(|marker| padded.contains(&format!(" {} ", marker)))
    }
}

impl Default for KeywordStrategySelector {
    fn default() -> Self {
        Self::new(SelectorManifest::default())
    }
}

impl LoadableModel for KeywordStrategySelector {
    fn load(model_dir: &Path) -> Result<Self, LoadError> {
        let mut manifest: SelectorManifest = read_manifest(model_dir, SELECTOR_MANIFEST)?;
        let embedding_path = resolve_embedding_path(model_dir, manifest.w2v_path.take());
        Ok(Self {
            manifest,
            embedding_path,
        })
    }
}

impl EmbeddingPathSource for KeywordStrategySelector {
    fn embedding_path(&self) -> Option<&Path> {
        self.embedding_path.as_deref()
    }
}

impl StrategySelector for KeywordStrategySelector {
    fn select(&self, premises: &[String], ctx: &GenerationContext<'_>) -> StrategyId {
        let tokens = ctx.text.tokenize(ctx.question.content());

        if self.opens_yes_no(&tokens) {
            StrategyId::YesNo
        } else if self.asks_for_number(&tokens) {
            StrategyId::DigitFallback
        } else if premises.iter().all(|p| p.trim().is_empty()) {
            StrategyId::SequenceGen
        } else {
            StrategyId::SpanCopy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::InMemoryEmbeddings;
    use crate::language::LanguageResources;
    use synth_domain::Question;

    fn select(question: &str, premises: &[&str]) -> StrategyId {
        let question = Question::new(question);
        let text = LanguageResources::default();
        let embeddings = InMemoryEmbeddings::new();
        let ctx = GenerationContext::new(&question, &text, &embeddings);
        let premises: Vec<String> = premises.iter().map(|p| p.to_string()).collect();
        KeywordStrategySelector::default().select(&premises, &ctx)
    }

    #[test]
    fn test_yes_no_opener() {
        assert_eq!(select("Are cats mammals?", &["Cats are mammals."]), StrategyId::YesNo);
        assert_eq!(select("Does it rain?", &[]), StrategyId::YesNo);
    }

    #[test]
    fn test_digit_marker() {
        assert_eq!(
            select("How many legs does a cat have?", &["A cat has four legs."]),
            StrategyId::DigitFallback
        );
    }

    #[test]
    fn test_marker_needs_word_boundaries() {
        // "showmany" must not match "how many"
        assert_eq!(select("Who showmany cats?", &["Bob."]), StrategyId::SpanCopy);
    }

    #[test]
    fn test_empty_premise_generates() {
        assert_eq!(select("What is the capital of France?", &[]), StrategyId::SequenceGen);
        assert_eq!(select("What is the capital of France?", &[""]), StrategyId::SequenceGen);
    }

    #[test]
    fn test_default_is_span_copy() {
        assert_eq!(
            select("What is the capital of France?", &["Paris is the capital of France."]),
            StrategyId::SpanCopy
        );
    }

    #[test]
    fn test_load_resolves_embedding_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SELECTOR_MANIFEST),
            r#"{"w2v_path": "w2v.txt", "yes_no_openers": ["ist"]}"#,
        )
        .unwrap();

        let selector = KeywordStrategySelector::load(dir.path()).unwrap();
        assert_eq!(selector.embedding_path(), Some(dir.path().join("w2v.txt").as_path()));
        assert_eq!(selector.manifest.yes_no_openers, vec!["ist".to_string()]);
        assert!(!selector.manifest.digit_markers.is_empty());
    }
}
