//! TF-IDF vectorizer for text feature extraction.

use super::error::ModelLoadError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tokens are runs of two or more word characters.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Normalization applied to each transformed vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Serialized form of a fitted vectorizer (`sentiment_vectorizer.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Term (or space-joined n-gram) -> feature index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency, indexed by feature.
    pub idf: Vec<f64>,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    /// Inclusive `(min_n, max_n)` range of word n-grams.
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    /// Use `1 + ln(tf)` instead of raw counts.
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

fn default_lowercase() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Fitted TF-IDF vectorizer.
///
/// Immutable after construction; `transform` takes `&self` and may be called
/// from any number of threads.
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    lowercase: bool,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Option<Norm>,
    token_pattern: Regex,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("ngram_range", &self.ngram_range)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("norm", &self.norm)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Build a vectorizer from its artifact, checking internal consistency.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, ModelLoadError> {
        let VectorizerArtifact {
            vocabulary,
            idf,
            lowercase,
            ngram_range,
            sublinear_tf,
            norm,
        } = artifact;

        if vocabulary.is_empty() {
            return Err(ModelLoadError::InvalidVectorizer(
                "vocabulary is empty".to_string(),
            ));
        }
        if idf.len() != vocabulary.len() {
            return Err(ModelLoadError::InvalidVectorizer(format!(
                "idf has {} entries but vocabulary has {} terms",
                idf.len(),
                vocabulary.len()
            )));
        }
        if let Some((term, idx)) = vocabulary.iter().find(|(_, idx)| **idx >= idf.len()) {
            return Err(ModelLoadError::InvalidVectorizer(format!(
                "term '{}' has out-of-range index {}",
                term, idx
            )));
        }
        if idf.iter().any(|w| !w.is_finite()) {
            return Err(ModelLoadError::InvalidVectorizer(
                "idf contains non-finite weights".to_string(),
            ));
        }
        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelLoadError::InvalidVectorizer(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        let token_pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| ModelLoadError::InvalidVectorizer(e.to_string()))?;

        Ok(Self {
            vocabulary,
            idf,
            lowercase,
            ngram_range,
            sublinear_tf,
            norm,
            token_pattern,
        })
    }

    /// Number of features in every transformed vector.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Terms missing from the vocabulary are ignored, so text with no known
    /// terms yields an all-zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features: Vec<f64> = vec![0.0; self.n_features()];

        // Count term frequencies
        for term in self.terms(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                features[idx] += 1.0;
            }
        }

        // Weight by idf
        for (idx, value) in features.iter_mut().enumerate() {
            if *value > 0.0 {
                if self.sublinear_tf {
                    *value = 1.0 + value.ln();
                }
                *value *= self.idf[idx];
            }
        }

        if let Some(norm) = self.norm {
            normalize(&mut features, norm);
        }

        features
    }

    /// Tokenize and expand into the configured n-grams.
    fn terms(&self, document: &str) -> Vec<String> {
        let text = if self.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        terms
    }
}

fn normalize(features: &mut [f64], norm: Norm) {
    let magnitude = match norm {
        Norm::L1 => features.iter().map(|x| x.abs()).sum::<f64>(),
        Norm::L2 => features.iter().map(|x| x * x).sum::<f64>().sqrt(),
    };
    if magnitude > 0.0 {
        for value in features.iter_mut() {
            *value /= magnitude;
        }
    }
}
