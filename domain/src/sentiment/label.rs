//! Sentiment label value object

use crate::core::string::capitalize;
use serde::{Deserialize, Serialize};

/// Categorical sentiment produced by a classifier (Value Object)
///
/// Stored in display form: first letter uppercase, the rest lowercase.
/// Deserialization goes through [`SentimentLabel::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SentimentLabel(String);

impl SentimentLabel {
    /// Build a label from the classifier's raw class name.
    pub fn from_raw(raw: &str) -> Self {
        Self(capitalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.0
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_capitalizes() {
        assert_eq!(SentimentLabel::from_raw("positive").as_str(), "Positive");
        assert_eq!(SentimentLabel::from_raw("NEGATIVE").as_str(), "Negative");
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let json = serde_json::to_string(&SentimentLabel::from_raw("neutral")).unwrap();
        assert_eq!(json, "\"Neutral\"");
    }

    #[test]
    fn test_deserialize_capitalizes() {
        let label: SentimentLabel = serde_json::from_str("\"POSITIVE\"").unwrap();
        assert_eq!(label.as_str(), "Positive");
    }
}
