//! Word-embedding store used to preload the vectors the models declare.

mod store;

pub use store::{EmbeddingError, InMemoryEmbeddings};
