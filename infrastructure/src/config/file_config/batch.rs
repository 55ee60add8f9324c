//! Batch configuration from TOML (`[batch]` section)

use serde::{Deserialize, Serialize};
use synth_domain::{ConfigIssue, ConfigIssueCode};

/// Raw batch configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Maximum number of requests answered at once
    pub max_concurrency: usize,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self { max_concurrency: 4 }
    }
}

impl FileBatchConfig {
    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        if self.max_concurrency == 0 {
            vec![ConfigIssue::error(
                ConfigIssueCode::ZeroConcurrency,
                "batch.max_concurrency: must be at least 1",
            )]
        } else {
            Vec::new()
        }
    }
}
