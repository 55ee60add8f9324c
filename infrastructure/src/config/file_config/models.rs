//! Model directory configuration from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use synth_domain::{ConfigIssue, ConfigIssueCode};

/// Raw model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// directory = "/opt/answer-synth/models"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Directory holding the `<name>.config` model manifests
    pub directory: PathBuf,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("models"),
        }
    }
}

impl FileModelsConfig {
    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        if self.directory.as_os_str().is_empty() {
            vec![ConfigIssue::error(
                ConfigIssueCode::EmptyModelDirectory,
                "models.directory: path cannot be empty",
            )]
        } else {
            Vec::new()
        }
    }
}
