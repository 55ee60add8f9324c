//! Loaded collaborator set.

use crate::ports::collaborators::{
    SequenceGenerator, SpanCopyGenerator, StrategySelector, YesNoScorer,
};
use std::sync::Arc;

/// The four collaborators an answer call dispatches to.
///
/// Built once at startup and shared by reference with every call; nothing in
/// here is mutated afterwards. The sequence generator serves both the
/// `SequenceGen` and `DigitFallback` strategies.
#[derive(Clone)]
pub struct AnswerModels {
    pub selector: Arc<dyn StrategySelector>,
    pub yes_no: Arc<dyn YesNoScorer>,
    pub span_copy: Arc<dyn SpanCopyGenerator>,
    pub sequence: Arc<dyn SequenceGenerator>,
}

impl AnswerModels {
    pub fn new(
        selector: Arc<dyn StrategySelector>,
        yes_no: Arc<dyn YesNoScorer>,
        span_copy: Arc<dyn SpanCopyGenerator>,
        sequence: Arc<dyn SequenceGenerator>,
    ) -> Self {
        Self {
            selector,
            yes_no,
            span_copy,
            sequence,
        }
    }
}

impl std::fmt::Debug for AnswerModels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerModels").finish_non_exhaustive()
    }
}
