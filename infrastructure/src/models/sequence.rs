//! Extractive sequence generator.

use super::lexical::{default_stop_words, normalize, novelty_marks};
use super::manifest::{read_manifest, resolve_embedding_path};
use crate::language::LanguageResources;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use synth_application::{
    EmbeddingPathSource, GenerationContext, LoadError, LoadableModel, SequenceGenerator,
};

pub const SEQUENCE_MANIFEST: &str = "sequence_generator.config";

/// Manifest for [`ExtractiveSequenceGenerator`]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SequenceManifest {
    pub w2v_path: Option<PathBuf>,
    pub stop_words: Vec<String>,
    /// Upper bound on words emitted for a non-numeric answer
    pub max_words: usize,
    /// Spelled-out numbers rewritten as digits
    pub number_words: HashMap<String, u64>,
}

impl Default for SequenceManifest {
    fn default() -> Self {
        let number_words = [
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve",
        ]
        .iter()
        .enumerate()
        .map(|(n, w)| (w.to_string(), n as u64))
        .collect();

        Self {
            w2v_path: None,
            stop_words: default_stop_words(),
            max_words: 6,
            number_words,
        }
    }
}

/// Builds answers from premise words rather than copying one span.
///
/// The first number in the premise (digits, or a spelled-out number from the
/// manifest) is returned alone as a digit string. Otherwise the premise words
/// not mentioned in the question are emitted in order, up to `max_words`.
#[derive(Debug, Clone)]
pub struct ExtractiveSequenceGenerator {
    manifest: SequenceManifest,
    embedding_path: Option<PathBuf>,
}

impl ExtractiveSequenceGenerator {
    pub fn new(manifest: SequenceManifest) -> Self {
        Self {
            manifest,
            embedding_path: None,
        }
    }

    fn first_number(&self, premise: &str, ctx: &GenerationContext<'_>) -> Option<String> {
        LanguageResources::words(premise).find_map(|word| {
            if is_numeral(word) {
                return Some(word.to_string());
            }
            normalize(ctx, word)
                .and_then(|n| self.manifest.number_words.get(&n))
                .map(u64::to_string)
        })
    }
}

fn is_numeral(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

impl Default for ExtractiveSequenceGenerator {
    fn default() -> Self {
        Self::new(SequenceManifest::default())
    }
}

impl LoadableModel for ExtractiveSequenceGenerator {
    fn load(model_dir: &Path) -> Result<Self, LoadError> {
        let mut manifest: SequenceManifest = read_manifest(model_dir, SEQUENCE_MANIFEST)?;
        let embedding_path = resolve_embedding_path(model_dir, manifest.w2v_path.take());
        Ok(Self {
            manifest,
            embedding_path,
        })
    }
}

impl EmbeddingPathSource for ExtractiveSequenceGenerator {
    fn embedding_path(&self) -> Option<&Path> {
        self.embedding_path.as_deref()
    }
}

impl SequenceGenerator for ExtractiveSequenceGenerator {
    fn generate(&self, premise: &str, ctx: &GenerationContext<'_>) -> String {
        if let Some(number) = self.first_number(premise, ctx) {
            return number;
        }

        novelty_marks(premise, ctx, &self.manifest.stop_words)
            .into_iter()
            .filter(|(_, novel)| *novel)
            .take(self.manifest.max_words)
            .map(|(word, _)| word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::InMemoryEmbeddings;
    use crate::language::LanguageResources;
    use synth_domain::Question;

    fn generate(question: &str, premise: &str) -> String {
        let question = Question::new(question);
        let text = LanguageResources::default();
        let embeddings = InMemoryEmbeddings::new();
        let ctx = GenerationContext::new(&question, &text, &embeddings);
        ExtractiveSequenceGenerator::default().generate(premise, &ctx)
    }

    #[test]
    fn test_digits_win() {
        assert_eq!(generate("When did it end?", "The war ended in 1945, in May."), "1945");
    }

    #[test]
    fn test_spelled_number_becomes_digits() {
        assert_eq!(generate("How many legs does a cat have?", "A cat has four legs."), "4");
    }

    #[test]
    fn test_novel_words_otherwise() {
        assert_eq!(
            generate("What colour is the sky?", "The sky is a deep shade of blue."),
            "deep shade blue"
        );
    }

    #[test]
    fn test_empty_premise_gives_empty() {
        assert_eq!(generate("How many?", ""), "");
    }

    #[test]
    fn test_is_numeral() {
        assert!(is_numeral("3.5"));
        assert!(is_numeral("1,000"));
        assert!(!is_numeral("..."));
        assert!(!is_numeral("4th"));
    }
}
