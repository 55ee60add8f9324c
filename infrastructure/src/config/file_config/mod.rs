//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod batch;
mod language;
mod log;
mod models;
mod output;

pub use batch::FileBatchConfig;
pub use language::FileLanguageConfig;
pub use log::FileLogConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use synth_domain::ConfigIssue;
use thiserror::Error;

/// Raised when validation finds at least one error-severity issue
#[derive(Debug, Error)]
#[error("invalid configuration: {}", .messages.join("; "))]
pub struct ConfigValidationError {
    pub messages: Vec<String>,
}

impl ConfigValidationError {
    /// Collect the error-severity issues, if any
    pub fn from_issues(issues: &[ConfigIssue]) -> Option<Self> {
        let messages: Vec<String> = issues
            .iter()
            .filter(|i| i.is_error())
            .map(|i| i.message.clone())
            .collect();
        (!messages.is_empty()).then_some(Self { messages })
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model manifest location
    pub models: FileModelsConfig,
    /// Localized answer tokens and tokenizer options
    pub language: FileLanguageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Batch settings
    pub batch: FileBatchConfig,
    /// Answer trace log
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.issues());
        issues.extend(self.language.issues());
        issues.extend(self.batch.issues());
        issues
    }
}
