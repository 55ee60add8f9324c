//! `[output]` section: how answer sets are printed

use serde::{Deserialize, Serialize};
use synth_domain::OutputFormat;

/// Rendering settings for answer sets.
///
/// ```toml
/// [output]
/// format = "json"
/// color = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Answer rendering; `--output` wins over this, text when neither is set
    pub format: Option<OutputFormat>,
    /// Colorize the question header and answers; `false` strips ANSI codes
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Pick the format for this run from the command-line choice and this section.
    pub fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }
}
