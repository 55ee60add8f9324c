//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_batch;
pub mod answer_models;
pub mod build_answer;
pub mod embedding_paths;
#[cfg(test)]
pub(crate) mod test_support;
