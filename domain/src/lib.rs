//! Domain layer for answer-synth
//!
//! This crate contains the value objects and entities of answer synthesis.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! An answer call receives a list of premise groups (each holding zero or one
//! premise sentence), a parallel list of relevance weights, and a question.
//! For every premise a [`StrategyId`] is chosen and the resulting text lands in
//! an [`AnswerSet`] together with the weight of the premise that produced it.

pub mod answer;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use answer::{
    answer_set::AnswerSet,
    polarity::{AFFIRMATIVE_THRESHOLD, Polarity},
    premise::{PremiseGroup, PremiseRelation, check_premise_input},
    strategy::StrategyId,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, question::Question};
