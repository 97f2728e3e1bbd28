//! Sentiment classifier port
//!
//! Defines the interface for turning text into a raw sentiment class.

use thiserror::Error;

/// Failure inside the vectorizer or classifier while serving a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Prediction failed: {message}")]
pub struct PredictionError {
    message: String,
}

impl PredictionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying cause, without the "Prediction failed" prefix
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Classifier for free text
///
/// Implementations hold an immutable, pre-loaded model and must be safe to
/// call from many requests at once without locking. Adapters live in the
/// infrastructure layer.
pub trait SentimentClassifier: Send + Sync {
    /// Vectorize `text` and return the single predicted class name, exactly
    /// as the model names it (e.g. `"positive"`).
    fn predict(&self, text: &str) -> Result<String, PredictionError>;
}
