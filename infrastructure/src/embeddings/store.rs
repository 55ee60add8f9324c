//! In-memory [`EmbeddingServices`] loaded from word2vec text files.
//!
//! Text format: one `word v1 v2 ... vN` entry per line, optionally preceded by
//! a `count dimension` header line.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use synth_application::EmbeddingServices;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while reading embedding files
#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("Failed to read embeddings {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{}: vector width {found} does not match {expected}", .path.display())]
    DimensionMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// Word vectors held in memory.
///
/// Later files add words; a word already present keeps its first vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmbeddings {
    vectors: HashMap<String, Vec<f32>>,
    dimension: usize,
    sources: Vec<PathBuf>,
}

impl InMemoryEmbeddings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit vectors (all must share one width).
    pub fn from_vectors(
        vectors: impl IntoIterator<Item = (String, Vec<f32>)>,
    ) -> Result<Self, EmbeddingError> {
        let mut store = Self::new();
        for (word, vector) in vectors {
            store.insert(Path::new("<memory>"), word, vector)?;
        }
        Ok(store)
    }

    /// Load every path in order, skipping paths that were already loaded.
    ///
    /// Several models usually share one embedding file, so the path list
    /// collected from them commonly repeats.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Self, EmbeddingError> {
        let mut store = Self::new();
        for path in paths {
            store.load_file(path.as_ref())?;
        }
        Ok(store)
    }

    /// Read one word2vec text file into the store.
    pub fn load_file(&mut self, path: &Path) -> Result<(), EmbeddingError> {
        if self.sources.iter().any(|p| p == path) {
            debug!("Embeddings {} already loaded, skipping", path.display());
            return Ok(());
        }

        let content = std::fs::read_to_string(path).map_err(|source| EmbeddingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let before = self.vectors.len();
        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            if index == 0 && rest.len() == 1 && Self::is_header(word, rest[0]) {
                continue;
            }

            let vector = rest
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
                .map_err(|e| EmbeddingError::Parse {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason: e.to_string(),
                })?;
            if vector.is_empty() {
                return Err(EmbeddingError::Parse {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason: format!("word '{}' has no vector", word),
                });
            }

            self.insert(path, word.to_string(), vector)?;
        }

        info!(
            "Loaded {} word vector(s) from {}",
            self.vectors.len() - before,
            path.display()
        );
        self.sources.push(path.to_path_buf());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Files loaded so far, in load order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    fn is_header(first: &str, second: &str) -> bool {
        first.parse::<usize>().is_ok() && second.parse::<usize>().is_ok()
    }

    fn insert(&mut self, path: &Path, word: String, vector: Vec<f32>) -> Result<(), EmbeddingError> {
        if self.dimension == 0 {
            self.dimension = vector.len();
        } else if vector.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                path: path.to_path_buf(),
                expected: self.dimension,
                found: vector.len(),
            });
        }
        self.vectors.entry(word).or_insert(vector);
        Ok(())
    }
}

impl EmbeddingServices for InMemoryEmbeddings {
    fn vector(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
