//! Error types for model artifact loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the vectorizer and classifier at startup.
///
/// Every variant is fatal: the service never starts without a model.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid vectorizer: {0}")]
    InvalidVectorizer(String),

    #[error("invalid classifier: {0}")]
    InvalidClassifier(String),

    #[error("classifier expects {expected} features but vectorizer produces {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
