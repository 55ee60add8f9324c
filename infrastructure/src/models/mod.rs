//! Baseline answer models.
//!
//! Each model is described by a JSON manifest in the model directory:
//!
//! | Model                           | Manifest                    |
//! |---------------------------------|-----------------------------|
//! | [`KeywordStrategySelector`]     | `strategy_selector.config`  |
//! | [`OverlapYesNoScorer`]          | `yes_no.config`             |
//! | [`NoveltySpanCopier`]           | `span_copy.config`          |
//! | [`ExtractiveSequenceGenerator`] | `sequence_generator.config` |
//!
//! A manifest may be `{}` to accept every default. Any manifest may declare a
//! `w2v_path`, which is reported through
//! [`EmbeddingPathSource`](synth_application::EmbeddingPathSource).

mod lexical;
mod manifest;
mod selector;
mod sequence;
mod span_copy;
mod yes_no;

pub use selector::{KeywordStrategySelector, SELECTOR_MANIFEST, SelectorManifest};
pub use sequence::{ExtractiveSequenceGenerator, SEQUENCE_MANIFEST, SequenceManifest};
pub use span_copy::{NoveltySpanCopier, SPAN_COPY_MANIFEST, SpanCopyManifest};
pub use yes_no::{OverlapYesNoScorer, YES_NO_MANIFEST, YesNoManifest};

use std::path::Path;
use std::sync::Arc;
use synth_application::{AnswerModels, LoadError, LoadableModel};
use tracing::info;

/// Load all four models from `model_dir`.
///
/// Fails on the first missing or malformed manifest.
pub fn load_answer_models(model_dir: &Path) -> Result<AnswerModels, LoadError> {
    let span_copy = NoveltySpanCopier::load(model_dir)?;
    let selector = KeywordStrategySelector::load(model_dir)?;
    let yes_no = OverlapYesNoScorer::load(model_dir)?;
    let sequence = ExtractiveSequenceGenerator::load(model_dir)?;

    info!("Loaded answer models from {}", model_dir.display());

    Ok(AnswerModels::new(
        Arc::new(selector),
        Arc::new(yes_no),
        Arc::new(span_copy),
        Arc::new(sequence),
    ))
}
