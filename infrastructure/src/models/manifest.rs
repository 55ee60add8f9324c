//! Model manifest reading.
//!
//! Every model directory entry is a `<name>.config` JSON document. Fields a
//! manifest omits take their defaults; `w2v_path` is resolved against the
//! model directory when relative.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use synth_application::LoadError;
use tracing::debug;

/// Read and parse `<model_dir>/<file_name>`.
pub(crate) fn read_manifest<T: DeserializeOwned>(
    model_dir: &Path,
    file_name: &str,
) -> Result<T, LoadError> {
    let path = model_dir.join(file_name);
    let content = std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::MissingResource { path: path.clone() }
        } else {
            LoadError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;

    debug!("Loading model manifest {}", path.display());
    serde_json::from_str(&content).map_err(|e| LoadError::Malformed {
        path,
        reason: e.to_string(),
    })
}

/// Resolve a manifest-declared embedding path against the model directory.
pub(crate) fn resolve_embedding_path(model_dir: &Path, declared: Option<PathBuf>) -> Option<PathBuf> {
    declared.map(|p| if p.is_relative() { model_dir.join(p) } else { p })
}
