//! Scripted collaborators shared by the use case tests.

use crate::ports::collaborators::{
    EmbeddingPathSource, GenerationContext, SequenceGenerator, SpanCopyGenerator,
    StrategySelector, YesNoScorer,
};
use crate::ports::services::{EmbeddingServices, TextServices};
use crate::use_cases::answer_models::AnswerModels;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use synth_domain::{Polarity, StrategyId};

/// Premises seen by a collaborator, in call order
pub(crate) type CallLog = Arc<Mutex<Vec<String>>>;

fn record(log: &CallLog, premise: &str) {
    log.lock().unwrap().push(premise.to_string());
}

/// Selector answering from a premise → strategy table
pub(crate) struct ScriptedSelector {
    routes: HashMap<String, StrategyId>,
    default: StrategyId,
    calls: CallLog,
    path: Option<PathBuf>,
}

impl ScriptedSelector {
    pub(crate) fn always(strategy: StrategyId) -> Self {
        Self {
            routes: HashMap::new(),
            default: strategy,
            calls: CallLog::default(),
            path: None,
        }
    }

    pub(crate) fn route(mut self, premise: &str, strategy: StrategyId) -> Self {
        self.routes.insert(premise.to_string(), strategy);
        self
    }

    pub(crate) fn with_embedding_path(mut self, path: &str) -> Self {
        self.path = Some(PathBuf::from(path));
        self
    }

    pub(crate) fn calls(&self) -> CallLog {
        self.calls.clone()
    }
}

impl EmbeddingPathSource for ScriptedSelector {
    fn embedding_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl StrategySelector for ScriptedSelector {
    fn select(&self, premises: &[String], _ctx: &GenerationContext<'_>) -> StrategyId {
        let premise = premises.first().map(String::as_str).unwrap_or("");
        record(&self.calls, premise);
        self.routes.get(premise).copied().unwrap_or(self.default)
    }
}

/// Scorer returning one fixed probability
pub(crate) struct FixedScorer {
    probability: f64,
    path: Option<PathBuf>,
}

impl FixedScorer {
    pub(crate) fn new(probability: f64) -> Self {
        Self {
            probability,
            path: None,
        }
    }

    pub(crate) fn with_embedding_path(mut self, path: &str) -> Self {
        self.path = Some(PathBuf::from(path));
        self
    }
}

impl EmbeddingPathSource for FixedScorer {
    fn embedding_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl YesNoScorer for FixedScorer {
    fn score(&self, _premises: &[String], _ctx: &GenerationContext<'_>) -> f64 {
        self.probability
    }
}

/// Generator answering from a premise → text table, `""` otherwise
pub(crate) struct MappedGenerator {
    outputs: HashMap<String, String>,
    calls: CallLog,
    path: Option<PathBuf>,
}

impl MappedGenerator {
    pub(crate) fn new() -> Self {
        Self {
            outputs: HashMap::new(),
            calls: CallLog::default(),
            path: None,
        }
    }

    pub(crate) fn answer(mut self, premise: &str, output: &str) -> Self {
        self.outputs.insert(premise.to_string(), output.to_string());
        self
    }

    pub(crate) fn with_embedding_path(mut self, path: &str) -> Self {
        self.path = Some(PathBuf::from(path));
        self
    }

    pub(crate) fn calls(&self) -> CallLog {
        self.calls.clone()
    }

    fn lookup(&self, premise: &str) -> String {
        record(&self.calls, premise);
        self.outputs.get(premise).cloned().unwrap_or_default()
    }
}

impl EmbeddingPathSource for MappedGenerator {
    fn embedding_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SpanCopyGenerator for MappedGenerator {
    fn generate(&self, premise: &str, _ctx: &GenerationContext<'_>) -> String {
        self.lookup(premise)
    }
}

impl SequenceGenerator for MappedGenerator {
    fn generate(&self, premise: &str, _ctx: &GenerationContext<'_>) -> String {
        self.lookup(premise)
    }
}

pub(crate) fn models_with(
    selector: ScriptedSelector,
    yes_no: FixedScorer,
    span_copy: MappedGenerator,
    sequence: MappedGenerator,
) -> AnswerModels {
    AnswerModels::new(
        Arc::new(selector),
        Arc::new(yes_no),
        Arc::new(span_copy),
        Arc::new(sequence),
    )
}

pub(crate) const YES: &str = "yes";
pub(crate) const NO: &str = "no";

/// Whitespace tokenizer with English yes/no tokens
pub(crate) struct PlainText;

impl TextServices for PlainText {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }

    fn polar_token(&self, polarity: Polarity) -> &str {
        match polarity {
            Polarity::Affirmative => YES,
            Polarity::Negative => NO,
        }
    }
}

/// Empty embedding vocabulary
pub(crate) struct NoEmbeddings;

impl EmbeddingServices for NoEmbeddings {
    fn vector(&self, _word: &str) -> Option<&[f32]> {
        None
    }

    fn dimension(&self) -> usize {
        0
    }
}
