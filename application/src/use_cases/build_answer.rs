//! Build Answer use case.
//!
//! Turns premise/relation pairs plus a question into an [`AnswerSet`]. For
//! each premise the strategy selector picks a generation mechanism and the
//! aggregator applies that strategy's policy:
//!
//! | Strategy        | Collaborator        | Empty text      | Dedup | After append |
//! |-----------------|---------------------|-----------------|-------|--------------|
//! | `YesNo`         | yes/no scorer       | n/a             | no    | stop         |
//! | `SpanCopy`      | span-copy generator | logged, skipped | yes   | continue     |
//! | `SequenceGen`   | sequence generator  | logged, skipped | yes   | continue     |
//! | `DigitFallback` | sequence generator  | appended        | no    | stop         |

use crate::ports::answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger};
use crate::ports::collaborators::GenerationContext;
use crate::ports::services::{EmbeddingServices, TextServices};
use crate::use_cases::answer_models::AnswerModels;
use std::sync::Arc;
use synth_domain::{
    AnswerSet, DomainError, Polarity, PremiseGroup, PremiseRelation, Question, StrategyId,
    check_premise_input,
};
use tracing::{debug, error, info};

/// Aggregates answers across premises by dispatching to the loaded models.
///
/// Holds no per-call state, so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct AnswerAggregator {
    models: Arc<AnswerModels>,
    answer_logger: Arc<dyn AnswerLogger>,
}

impl AnswerAggregator {
    pub fn new(models: Arc<AnswerModels>) -> Self {
        Self {
            models,
            answer_logger: Arc::new(NoAnswerLogger),
        }
    }

    /// Create with an answer logger.
    pub fn with_answer_logger(mut self, logger: Arc<dyn AnswerLogger>) -> Self {
        self.answer_logger = logger;
        self
    }

    /// Build the answer set for one question.
    ///
    /// Fails with a [`DomainError`] before consulting any model when the
    /// premise and relation lists differ in length or a premise group holds
    /// more than one premise. Otherwise always succeeds; an empty set is a
    /// valid outcome.
    pub fn build_answer(
        &self,
        premise_groups: &[PremiseGroup],
        premise_relations: &[PremiseRelation],
        question: &Question,
        text: &dyn TextServices,
        embeddings: &dyn EmbeddingServices,
    ) -> Result<AnswerSet, DomainError> {
        check_premise_input(premise_groups, premise_relations)?;

        let ctx = GenerationContext::new(question, text, embeddings);
        let mut answers = AnswerSet::new();
        let mut processed = 0usize;

        for (group, &relation) in premise_groups.iter().zip(premise_relations) {
            processed += 1;
            let strategy = self.answer_premise(group, relation, &ctx, &mut answers);
            if strategy.is_terminal() {
                debug!("{} answer ends the call", strategy);
                break;
            }
        }

        info!(
            "Built {} answer(s) from {}/{} premise group(s)",
            answers.len(),
            processed,
            premise_groups.len()
        );

        self.answer_logger.log(AnswerEvent::new(
            "answer_built",
            serde_json::json!({
                "question": question.content(),
                "premises_processed": processed,
                "premises_total": premise_groups.len(),
                "answers": answers.answers(),
                "relations": answers.relations(),
            }),
        ));

        Ok(answers)
    }

    /// Answer one premise and return the strategy that handled it.
    fn answer_premise(
        &self,
        group: &PremiseGroup,
        relation: PremiseRelation,
        ctx: &GenerationContext<'_>,
        answers: &mut AnswerSet,
    ) -> StrategyId {
        let premise = group.premise_text();
        let strategy = self.models.selector.select(group.premises(), ctx);

        debug!("Strategy selected: {} (premise={:?})", strategy, premise);
        self.answer_logger.log(AnswerEvent::new(
            "strategy_selected",
            serde_json::json!({
                "premise": premise,
                "question": ctx.question.content(),
                "strategy": strategy,
            }),
        ));

        match strategy {
            StrategyId::YesNo => {
                let probability = self.models.yes_no.score(group.premises(), ctx);
                let polarity = Polarity::from_probability(probability);
                debug!("Yes/no probability {:.3} -> {:?}", probability, polarity);
                answers.push(ctx.text.polar_token(polarity), relation);
            }
            StrategyId::SpanCopy => {
                let text = self.models.span_copy.generate(premise, ctx);
                if text.is_empty() {
                    self.empty_generation(strategy, premise, ctx, "span copy generator");
                } else {
                    answers.insert_unique(text, relation);
                }
            }
            StrategyId::SequenceGen => {
                let text = self.models.sequence.generate(premise, ctx);
                if text.is_empty() {
                    self.empty_generation(strategy, premise, ctx, "sequence generator");
                } else {
                    answers.insert_unique(text, relation);
                }
            }
            StrategyId::DigitFallback => {
                let text = self.models.sequence.generate(premise, ctx);
                answers.push(text, relation);
            }
        }

        strategy
    }

    fn empty_generation(
        &self,
        strategy: StrategyId,
        premise: &str,
        ctx: &GenerationContext<'_>,
        generator: &str,
    ) {
        error!(
            "Empty answer generated by {} for premise={:?}, question={:?}",
            generator,
            premise,
            ctx.question.content()
        );
        self.answer_logger.log(AnswerEvent::new(
            "empty_generation",
            serde_json::json!({
                "strategy": strategy,
                "premise": premise,
                "question": ctx.question.content(),
            }),
        ));
    }
}
