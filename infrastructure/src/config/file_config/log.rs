//! Log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw log configuration from TOML
///
/// # Example
///
/// ```toml
/// [log]
/// answer_log = "~/.local/share/answer-synth/answers.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file receiving one record per answer event
    pub answer_log: Option<PathBuf>,
}

impl FileLogConfig {
    /// Answer log path with a leading `~` expanded to the home directory
    pub fn answer_log_path(&self) -> Option<PathBuf> {
        let path = self.answer_log.as_ref()?;
        if let Ok(rest) = path.strip_prefix("~")
            && let Some(home) = dirs::home_dir()
        {
            return Some(home.join(rest));
        }
        Some(path.clone())
    }
}
