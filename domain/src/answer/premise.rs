//! Premise groups and their relevance weights

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Candidate supporting sentences for one answer slot (Value Object)
///
/// Upstream retrieval supplies either no premise or exactly one. The group is
/// kept as a sequence because the collaborators consume it that way; the
/// aggregator rejects anything longer through [`PremiseGroup::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PremiseGroup {
    premises: Vec<String>,
}

impl PremiseGroup {
    pub fn new(premises: Vec<String>) -> Self {
        Self { premises }
    }

    /// A group with no premise at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// A group holding exactly one premise
    pub fn single(premise: impl Into<String>) -> Self {
        Self {
            premises: vec![premise.into()],
        }
    }

    pub fn premises(&self) -> &[String] {
        &self.premises
    }

    pub fn len(&self) -> usize {
        self.premises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.premises.is_empty()
    }

    /// The single premise, or `""` for an empty group
    pub fn premise_text(&self) -> &str {
        self.premises.first().map(String::as_str).unwrap_or("")
    }

    /// Verify the at-most-one invariant for the group at `index`
    pub fn check(&self, index: usize) -> Result<(), DomainError> {
        if self.premises.len() > 1 {
            return Err(DomainError::OversizedPremiseGroup {
                index,
                len: self.premises.len(),
            });
        }
        Ok(())
    }
}

impl From<Option<String>> for PremiseGroup {
    fn from(premise: Option<String>) -> Self {
        Self {
            premises: premise.into_iter().collect(),
        }
    }
}

/// Relevance weight carried from a premise to the answers it produced
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PremiseRelation(pub f64);

impl PremiseRelation {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for PremiseRelation {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PremiseRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Check the pairing invariants of a whole call before any work starts
pub fn check_premise_input(
    groups: &[PremiseGroup],
    relations: &[PremiseRelation],
) -> Result<(), DomainError> {
    if groups.len() != relations.len() {
        return Err(DomainError::PremiseRelationMismatch {
            groups: groups.len(),
            relations: relations.len(),
        });
    }
    groups
        .iter()
        .enumerate()
        .try_for_each(|(index, group)| group.check(index))
}
