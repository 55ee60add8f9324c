//! Language configuration from TOML (`[language]` section)

use crate::language::LanguageResources;
use serde::{Deserialize, Serialize};
use synth_domain::{ConfigIssue, ConfigIssueCode};

/// Raw language configuration from TOML
///
/// # Example
///
/// ```toml
/// [language]
/// affirmative = "oui"
/// negative = "non"
/// lowercase = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLanguageConfig {
    /// Token emitted for an affirmative yes/no answer
    pub affirmative: String,
    /// Token emitted for a negative yes/no answer
    pub negative: String,
    /// Fold case when tokenizing
    pub lowercase: bool,
}

impl Default for FileLanguageConfig {
    fn default() -> Self {
        Self {
            affirmative: "yes".to_string(),
            negative: "no".to_string(),
            lowercase: true,
        }
    }
}

impl FileLanguageConfig {
    pub fn to_language_resources(&self) -> LanguageResources {
        LanguageResources::new(self.affirmative.trim(), self.negative.trim())
            .with_lowercase(self.lowercase)
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [("affirmative", &self.affirmative), ("negative", &self.negative)] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyToken {
                        field: field.to_string(),
                    },
                    format!("language.{}: token cannot be empty", field),
                ));
            }
        }

        if issues.is_empty() && self.affirmative.trim() == self.negative.trim() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::IndistinctTokens,
                format!(
                    "language: affirmative and negative are both '{}', yes/no answers will be indistinguishable",
                    self.affirmative.trim()
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_application::TextServices;
    use synth_domain::Polarity;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FileLanguageConfig::default().issues().is_empty());
    }

    #[test]
    fn test_empty_token_is_error() {
        let config = FileLanguageConfig {
            negative: "  ".to_string(),
            ..Default::default()
        };
        let issues = config.issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyToken {
                field: "negative".to_string()
            }
        );
    }

    #[test]
    fn test_identical_tokens_warn() {
        let config = FileLanguageConfig {
            affirmative: "ok".to_string(),
            negative: "ok".to_string(),
            lowercase: true,
        };
        let issues = config.issues();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(issues[0].code, ConfigIssueCode::IndistinctTokens);
    }

    #[test]
    fn test_to_language_resources() {
        let config = FileLanguageConfig {
            affirmative: " oui ".to_string(),
            negative: "non".to_string(),
            lowercase: false,
        };
        let resources = config.to_language_resources();
        assert_eq!(resources.polar_token(Polarity::Affirmative), "oui");
        assert_eq!(resources.polar_token(Polarity::Negative), "non");
        assert_eq!(resources.tokenize("Paris"), vec!["Paris".to_string()]);
    }
}
