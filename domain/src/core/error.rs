//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a contract violation: the caller handed the aggregator
/// input that breaks an upstream invariant. None of them are recoverable
/// inside a single call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Premise groups ({groups}) and premise relations ({relations}) differ in length")]
    PremiseRelationMismatch { groups: usize, relations: usize },

    #[error("Premise group #{index} holds {len} premises; at most one is allowed")]
    OversizedPremiseGroup { index: usize, len: usize },
}
