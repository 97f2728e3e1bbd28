//! Model artifact configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the serialized vectorizer and classifier.
///
/// Relative paths resolve against the working directory.
///
/// # Example
///
/// ```toml
/// [model]
/// vectorizer_path = "/srv/models/sentiment_vectorizer.json"
/// classifier_path = "/srv/models/sentiment_classifier.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    pub vectorizer_path: PathBuf,
    pub classifier_path: PathBuf,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            vectorizer_path: PathBuf::from("sentiment_vectorizer.json"),
            classifier_path: PathBuf::from("sentiment_classifier.json"),
        }
    }
}
