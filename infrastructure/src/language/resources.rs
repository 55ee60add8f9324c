//! [`TextServices`] backed by the `[language]` config section.

use synth_application::TextServices;
use synth_domain::Polarity;

/// Localized yes/no tokens plus a punctuation-stripping word tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageResources {
    affirmative: String,
    negative: String,
    lowercase: bool,
}

impl LanguageResources {
    pub fn new(affirmative: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            affirmative: affirmative.into(),
            negative: negative.into(),
            lowercase: true,
        }
    }

    /// Keep the original casing of tokens
    pub fn preserve_case(mut self) -> Self {
        self.lowercase = false;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Split text into words with surrounding punctuation trimmed.
    ///
    /// Inner apostrophes and hyphens survive ("don't", "well-known") while
    /// tokens made only of punctuation are dropped.
    pub fn words(text: &str) -> impl Iterator<Item = &str> {
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
    }
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::new("yes", "no")
    }
}

impl TextServices for LanguageResources {
    fn tokenize(&self, text: &str) -> Vec<String> {
        Self::words(text)
            .map(|w| {
                if self.lowercase {
                    w.to_lowercase()
                } else {
                    w.to_string()
                }
            })
            .collect()
    }

    fn polar_token(&self, polarity: Polarity) -> &str {
        match polarity {
            Polarity::Affirmative => &self.affirmative,
            Polarity::Negative => &self.negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_trims_punctuation_and_lowercases() {
        let text = LanguageResources::default();
        assert_eq!(
            text.tokenize("Paris is the capital of France."),
            vec!["paris", "is", "the", "capital", "of", "france"]
        );
        assert_eq!(text.tokenize("Don't stop -- now!"), vec!["don't", "stop", "now"]);
    }

    #[test]
    fn test_tokenize_preserve_case() {
        let text = LanguageResources::default().preserve_case();
        assert_eq!(text.tokenize("Hello, World"), vec!["Hello", "World"]);
    }

    #[test]
    fn test_tokenize_unicode() {
        let text = LanguageResources::new("да", "нет");
        assert_eq!(text.tokenize("Кошки — млекопитающие."), vec!["кошки", "млекопитающие"]);
    }

    #[test]
    fn test_polar_tokens() {
        let text = LanguageResources::new("да", "нет");
        assert_eq!(text.polar_token(Polarity::Affirmative), "да");
        assert_eq!(text.polar_token(Polarity::Negative), "нет");
    }
}
