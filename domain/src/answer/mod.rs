//! Answer synthesis domain.
//!
//! - [`strategy::StrategyId`]: how an answer is produced for one premise
//! - [`premise::PremiseGroup`] / [`premise::PremiseRelation`]: the input pairs
//! - [`polarity::Polarity`]: yes/no classification outcome
//! - [`answer_set::AnswerSet`]: accumulated answers with provenance

pub mod answer_set;
pub mod polarity;
pub mod premise;
pub mod strategy;
