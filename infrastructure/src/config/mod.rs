//! Configuration file loading for answer-synth
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANSWER_SYNTH_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./answer-synth.toml` or `./.answer-synth.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/answer-synth/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBatchConfig, FileConfig, FileLanguageConfig, FileLogConfig,
    FileModelsConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
