//! Accumulated answers with provenance

use super::premise::PremiseRelation;
use serde::{Deserialize, Serialize};

/// Ordered answers paired with the relation of the premise that produced them
/// (Entity, one per answer call)
///
/// `answers` and `relations` always have the same length. Insertion through
/// [`AnswerSet::insert_unique`] keeps answers unique by exact string match;
/// [`AnswerSet::push`] appends without looking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: Vec<String>,
    relations: Vec<PremiseRelation>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally
    pub fn push(&mut self, answer: impl Into<String>, relation: PremiseRelation) {
        self.answers.push(answer.into());
        self.relations.push(relation);
    }

    /// Append unless an identical answer is already present.
    ///
    /// Returns `true` when the answer was added. The relation of the first
    /// occurrence is the one that survives.
    pub fn insert_unique(&mut self, answer: impl Into<String>, relation: PremiseRelation) -> bool {
        let answer = answer.into();
        if self.contains(&answer) {
            return false;
        }
        self.push(answer, relation);
        true
    }

    pub fn contains(&self, answer: &str) -> bool {
        self.answers.iter().any(|a| a == answer)
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn relations(&self) -> &[PremiseRelation] {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate `(answer, relation)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, PremiseRelation)> {
        self.answers
            .iter()
            .map(String::as_str)
            .zip(self.relations.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_unique_keeps_first_relation() {
        let mut set = AnswerSet::new();
        assert!(set.insert_unique("Paris", PremiseRelation(1.0)));
        assert!(!set.insert_unique("Paris", PremiseRelation(0.8)));
        assert_eq!(set.answers(), &["Paris".to_string()]);
        assert_eq!(set.relations(), &[PremiseRelation(1.0)]);
    }

    #[test]
    fn test_dedup_is_exact_match() {
        let mut set = AnswerSet::new();
        set.insert_unique("Paris", PremiseRelation(1.0));
        assert!(set.insert_unique("paris", PremiseRelation(0.5)));
        assert!(set.insert_unique("Paris ", PremiseRelation(0.4)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_push_allows_duplicates_and_empty() {
        let mut set = AnswerSet::new();
        set.push("42", PremiseRelation(0.9));
        set.push("42", PremiseRelation(0.3));
        set.push("", PremiseRelation(0.1));
        assert_eq!(set.len(), 3);
        assert!(set.contains(""));
    }

    #[test]
    fn test_iter_stays_parallel() {
        let mut set = AnswerSet::new();
        set.push("a", PremiseRelation(0.1));
        set.push("b", PremiseRelation(0.2));

        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![("a", PremiseRelation(0.1)), ("b", PremiseRelation(0.2))]);
        assert_eq!(set.answers(), &["a".to_string(), "b".to_string()]);
        assert_eq!(set.relations(), &[PremiseRelation(0.1), PremiseRelation(0.2)]);
    }

    #[test]
    fn test_serialize_shape() {
        let mut set = AnswerSet::new();
        set.push("yes", PremiseRelation(1.0));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({"answers": ["yes"], "relations": [1.0]}));
    }
}
