//! Lexical helpers shared by the baseline models.

use crate::language::LanguageResources;
use std::collections::HashSet;
use synth_application::GenerationContext;

/// Function words ignored when comparing premise and question
pub(crate) const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "of", "to", "in", "on", "at", "by", "for", "with", "and", "or", "is",
    "are", "was", "were", "be", "do", "does", "did", "what", "which", "who", "whom", "where",
    "when", "how", "why", "it", "this", "that",
];

pub(crate) fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Normalized form of one surface word, as the text services see it
pub(crate) fn normalize(ctx: &GenerationContext<'_>, word: &str) -> Option<String> {
    ctx.text.tokenize(word).into_iter().next()
}

/// Normalized question tokens
pub(crate) fn question_terms(ctx: &GenerationContext<'_>) -> HashSet<String> {
    ctx.text.tokenize(ctx.question.content()).into_iter().collect()
}

/// Surface words of the premise, each flagged as novel when its normalized
/// form is neither in the question nor a stop word.
pub(crate) fn novelty_marks<'p>(
    premise: &'p str,
    ctx: &GenerationContext<'_>,
    stop_words: &[String],
) -> Vec<(&'p str, bool)> {
    let question = question_terms(ctx);
    LanguageResources::words(premise)
        .map(|word| {
            let novel = normalize(ctx, word)
                .is_some_and(|n| !question.contains(&n) && !stop_words.contains(&n));
            (word, novel)
        })
        .collect()
}

/// Cosine similarity of two equally sized vectors
pub(crate) fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
