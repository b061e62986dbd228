//! Reference data error types.

use std::path::PathBuf;

/// Errors that can occur when loading or reading reference data.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the catalog schema
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing store failed
    #[error("reference store error: {0}")]
    Store(String),
}
