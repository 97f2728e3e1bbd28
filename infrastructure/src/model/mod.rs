//! Sentiment model adapter.
//!
//! Implements the [`SentimentClassifier`](sentiquote_application::SentimentClassifier)
//! port with a TF-IDF vectorizer feeding a linear classifier, both read
//! from JSON artifacts at startup:
//!
//! - `sentiment_vectorizer.json` - vocabulary, idf weights, tokenizer options
//! - `sentiment_classifier.json` - class names, coefficients, intercepts

pub mod classifier;
pub mod error;
pub mod loader;
pub mod vectorizer;

pub use classifier::{ClassifierArtifact, LinearClassifier};
pub use error::ModelLoadError;
pub use loader::ArtifactSentimentModel;
pub use vectorizer::{Norm, TfIdfVectorizer, VectorizerArtifact};
