//! Yes/no polarity value object

use serde::{Deserialize, Serialize};

/// Probability at or above which a yes/no answer is affirmative
pub const AFFIRMATIVE_THRESHOLD: f64 = 0.5;

/// Outcome of a yes/no classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Affirmative,
    Negative,
}

impl Polarity {
    /// Classify a probability of the answer being affirmative.
    ///
    /// Only values strictly below [`AFFIRMATIVE_THRESHOLD`] are negative, so an
    /// exact tie is affirmative.
    pub fn from_probability(p: f64) -> Self {
        if p < AFFIRMATIVE_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Affirmative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(Polarity::from_probability(0.49), Polarity::Negative);
        assert_eq!(Polarity::from_probability(0.5), Polarity::Affirmative);
        assert_eq!(Polarity::from_probability(0.51), Polarity::Affirmative);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Polarity::from_probability(0.0), Polarity::Negative);
        assert_eq!(Polarity::from_probability(1.0), Polarity::Affirmative);
    }
}
