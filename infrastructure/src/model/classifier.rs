//! Linear sentiment classifier over TF-IDF features.

use super::error::ModelLoadError;
use sentiquote_application::PredictionError;
use serde::{Deserialize, Serialize};

/// Serialized form of a fitted linear model (`sentiment_classifier.json`).
///
/// A binary model carries a single coefficient row whose positive side is
/// `classes[1]`; a multiclass model carries one row per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// Fitted linear classifier (logistic regression, linear SVM, ...).
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    /// Build a classifier from its artifact, checking shapes.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, ModelLoadError> {
        let ClassifierArtifact {
            classes,
            coef,
            intercept,
        } = artifact;

        if classes.len() < 2 {
            return Err(ModelLoadError::InvalidClassifier(format!(
                "need at least two classes, got {}",
                classes.len()
            )));
        }
        let binary = coef.len() == 1 && classes.len() == 2;
        if !binary && coef.len() != classes.len() {
            return Err(ModelLoadError::InvalidClassifier(format!(
                "{} coefficient rows for {} classes",
                coef.len(),
                classes.len()
            )));
        }
        if intercept.len() != coef.len() {
            return Err(ModelLoadError::InvalidClassifier(format!(
                "{} intercepts for {} coefficient rows",
                intercept.len(),
                coef.len()
            )));
        }
        let width = coef[0].len();
        if coef.iter().any(|row| row.len() != width) {
            return Err(ModelLoadError::InvalidClassifier(
                "coefficient rows have different lengths".to_string(),
            ));
        }

        Ok(Self {
            classes,
            coef,
            intercept,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of input features the model was fitted on.
    pub fn n_features(&self) -> usize {
        self.coef[0].len()
    }

    /// Predict the class name for one feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<&str, PredictionError> {
        if features.len() != self.n_features() {
            return Err(PredictionError::new(format!(
                "expected {} features, got {}",
                self.n_features(),
                features.len()
            )));
        }

        let scores: Vec<f64> = self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| dot(row, features) + b)
            .collect();
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(PredictionError::new("decision function is not finite"));
        }

        let idx = if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            // Ties go to the lowest index
            let mut best = 0;
            for (i, score) in scores.iter().enumerate().skip(1) {
                if *score > scores[best] {
                    best = i;
                }
            }
            best
        };

        Ok(&self.classes[idx])
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> LinearClassifier {
        LinearClassifier::from_artifact(ClassifierArtifact {
            classes: vec!["negative".to_string(), "positive".to_string()],
            coef: vec![vec![2.0, -3.0]],
            intercept: vec![-0.5],
        })
        .unwrap()
    }

    #[test]
    fn test_binary_decision() {
        let model = binary();
        assert_eq!(model.predict(&[1.0, 0.0]).unwrap(), "positive");
        assert_eq!(model.predict(&[0.0, 1.0]).unwrap(), "negative");
        // score == 0 falls on the negative side
        assert_eq!(model.predict(&[0.25, 0.0]).unwrap(), "negative");
    }

    #[test]
    fn test_multiclass_argmax() {
        let model = LinearClassifier::from_artifact(ClassifierArtifact {
            classes: vec![
                "negative".to_string(),
                "neutral".to_string(),
                "positive".to_string(),
            ],
            coef: vec![vec![1.0, 0.0], vec![0.0, 0.0], vec![0.0, 1.0]],
            intercept: vec![0.0, 0.1, 0.0],
        })
        .unwrap();

        assert_eq!(model.predict(&[1.0, 0.0]).unwrap(), "negative");
        assert_eq!(model.predict(&[0.0, 1.0]).unwrap(), "positive");
        assert_eq!(model.predict(&[0.0, 0.0]).unwrap(), "neutral");
    }

    #[test]
    fn test_multiclass_tie_takes_first() {
        let model = LinearClassifier::from_artifact(ClassifierArtifact {
            classes: vec!["a".to_string(), "b".to_string()],
            coef: vec![vec![1.0], vec![1.0]],
            intercept: vec![0.0, 0.0],
        })
        .unwrap();
        assert_eq!(model.predict(&[1.0]).unwrap(), "a");
    }

    #[test]
    fn test_wrong_feature_count_is_prediction_error() {
        let err = binary().predict(&[1.0]).unwrap_err();
        assert_eq!(err.to_string(), "Prediction failed: expected 2 features, got 1");
    }

    #[test]
    fn test_non_finite_score_is_prediction_error() {
        let err = binary().predict(&[f64::NAN, 0.0]).unwrap_err();
        assert!(err.message().contains("not finite"));
    }

    #[test]
    fn test_rejects_single_class() {
        let err = LinearClassifier::from_artifact(ClassifierArtifact {
            classes: vec!["positive".to_string()],
            coef: vec![vec![1.0]],
            intercept: vec![0.0],
        })
        .unwrap_err();
        assert!(matches!(err, ModelLoadError::InvalidClassifier(_)));
    }

    #[test]
    fn test_rejects_row_count_mismatch() {
        let err = LinearClassifier::from_artifact(ClassifierArtifact {
            classes: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            coef: vec![vec![1.0], vec![1.0]],
            intercept: vec![0.0, 0.0],
        })
        .unwrap_err();
        assert!(err.to_string().contains("2 coefficient rows for 3 classes"));
    }

    #[test]
    fn test_rejects_intercept_mismatch() {
        let err = LinearClassifier::from_artifact(ClassifierArtifact {
            classes: vec!["a".to_string(), "b".to_string()],
            coef: vec![vec![1.0]],
            intercept: vec![],
        })
        .unwrap_err();
        assert!(matches!(err, ModelLoadError::InvalidClassifier(_)));
    }
}
