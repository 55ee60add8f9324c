//! Answer strategy value object

use serde::{Deserialize, Serialize};

/// The mechanism chosen to produce an answer for one premise (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    /// Binary classification into the localized yes/no tokens
    YesNo,
    /// Copy a span of words out of the premise
    SpanCopy,
    /// Generate free text with the sequence generator
    SequenceGen,
    /// Digit-only answers, currently served by the sequence generator
    DigitFallback,
}

impl StrategyId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyId::YesNo => "yes_no",
            StrategyId::SpanCopy => "span_copy",
            StrategyId::SequenceGen => "sequence_gen",
            StrategyId::DigitFallback => "digit_fallback",
        }
    }

    /// Whether an answer from this strategy ends the whole aggregation
    pub fn is_terminal(&self) -> bool {
        matches!(self, StrategyId::YesNo | StrategyId::DigitFallback)
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
