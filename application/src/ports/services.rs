//! Shared text and embedding services.
//!
//! Both services are owned by the caller and handed to every collaborator for
//! the duration of one answer call. The aggregator itself only reads the
//! localized yes/no tokens.

use synth_domain::Polarity;

/// Language-specific text helpers and the localized-token dictionary
pub trait TextServices: Send + Sync {
    /// Split text into normalized word tokens
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Localized answer token for a yes/no outcome
    fn polar_token(&self, polarity: Polarity) -> &str;
}

/// Word-embedding lookup
pub trait EmbeddingServices: Send + Sync {
    /// Vector for a word, if the vocabulary knows it
    fn vector(&self, word: &str) -> Option<&[f32]>;

    /// Width of every vector returned by [`EmbeddingServices::vector`]
    fn dimension(&self) -> usize;

    /// Check if a word is in the vocabulary
    fn contains(&self, word: &str) -> bool {
        self.vector(word).is_some()
    }
}
