//! Language resources: tokenizer and localized answer tokens.

mod resources;

pub use resources::LanguageResources;
