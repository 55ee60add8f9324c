//! Output format value object

use serde::{Deserialize, Serialize};

/// How answer sets are rendered for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing (default)
    #[default]
    Text,
    /// JSON output
    Json,
}
