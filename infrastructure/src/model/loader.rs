//! Artifact loading and the assembled sentiment model.

use super::classifier::{ClassifierArtifact, LinearClassifier};
use super::error::ModelLoadError;
use super::vectorizer::{TfIdfVectorizer, VectorizerArtifact};
use sentiquote_application::{PredictionError, SentimentClassifier};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Vectorizer and classifier loaded from disk, paired and checked for
/// matching dimensions.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug)]
pub struct ArtifactSentimentModel {
    vectorizer: TfIdfVectorizer,
    classifier: LinearClassifier,
}

impl ArtifactSentimentModel {
    pub fn new(
        vectorizer: TfIdfVectorizer,
        classifier: LinearClassifier,
    ) -> Result<Self, ModelLoadError> {
        if vectorizer.n_features() != classifier.n_features() {
            return Err(ModelLoadError::DimensionMismatch {
                expected: classifier.n_features(),
                actual: vectorizer.n_features(),
            });
        }
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts. Any failure here is meant to abort startup.
    pub fn load(vectorizer_path: &Path, classifier_path: &Path) -> Result<Self, ModelLoadError> {
        debug!("Loading vectorizer from {}", vectorizer_path.display());
        let vectorizer =
            TfIdfVectorizer::from_artifact(read_artifact::<VectorizerArtifact>(vectorizer_path)?)?;

        debug!("Loading classifier from {}", classifier_path.display());
        let classifier =
            LinearClassifier::from_artifact(read_artifact::<ClassifierArtifact>(classifier_path)?)?;

        let model = Self::new(vectorizer, classifier)?;
        info!(
            "Sentiment model loaded: {} features, classes [{}]",
            model.vectorizer.n_features(),
            model.classifier.classes().join(", ")
        );
        Ok(model)
    }

    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }
}

impl SentimentClassifier for ArtifactSentimentModel {
    fn predict(&self, text: &str) -> Result<String, PredictionError> {
        let features = self.vectorizer.transform(text);
        self.classifier.predict(&features).map(str::to_string)
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const VECTORIZER: &str = r#"{
        "vocabulary": {"love": 0, "great": 1, "hate": 2, "awful": 3},
        "idf": [1.0, 1.0, 1.0, 1.0]
    }"#;

    const CLASSIFIER: &str = r#"{
        "classes": ["negative", "positive"],
        "coef": [[2.0, 2.0, -2.0, -2.0]],
        "intercept": [0.0]
    }"#;

    fn write_artifacts(dir: &TempDir, vectorizer: &str, classifier: &str) -> (PathBuf, PathBuf) {
        let v = dir.path().join("sentiment_vectorizer.json");
        let c = dir.path().join("sentiment_classifier.json");
        fs::write(&v, vectorizer).unwrap();
        fs::write(&c, classifier).unwrap();
        (v, c)
    }

    #[test]
    fn test_load_and_predict() {
        let dir = TempDir::new().unwrap();
        let (v, c) = write_artifacts(&dir, VECTORIZER, CLASSIFIER);

        let model = ArtifactSentimentModel::load(&v, &c).unwrap();
        assert_eq!(model.classes(), ["negative", "positive"]);
        assert_eq!(model.predict("I love this, it's great").unwrap(), "positive");
        assert_eq!(model.predict("awful. I hate it").unwrap(), "negative");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let (v, _) = write_artifacts(&dir, VECTORIZER, CLASSIFIER);
        let missing = dir.path().join("nope.json");

        let err = ArtifactSentimentModel::load(&v, &missing).unwrap_err();
        assert!(matches!(err, ModelLoadError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let (v, c) = write_artifacts(&dir, "not json at all", CLASSIFIER);

        let err = ArtifactSentimentModel::load(&v, &c).unwrap_err();
        assert!(matches!(err, ModelLoadError::Parse { .. }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let dir = TempDir::new().unwrap();
        let classifier = r#"{"classes": ["neg", "pos"], "coef": [[1.0, -1.0]], "intercept": [0.0]}"#;
        let (v, c) = write_artifacts(&dir, VECTORIZER, classifier);

        let err = ArtifactSentimentModel::load(&v, &c).unwrap_err();
        assert!(matches!(
            err,
            ModelLoadError::DimensionMismatch {
                expected: 2,
                actual: 4
            }
        ));
    }
}
