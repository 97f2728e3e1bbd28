//! Quote entities

use crate::sentiment::label::SentimentLabel;
use serde::{Deserialize, Serialize};

/// An inspirational quote and its author.
///
/// Fetched fresh for every request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

/// A sentiment label paired with a quote.
///
/// Only built once both the prediction and the quote fetch have succeeded;
/// there is no partially filled variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedSentiment {
    pub sentiment: SentimentLabel,
    pub quote: Quote,
}

impl QuotedSentiment {
    pub fn new(sentiment: SentimentLabel, quote: Quote) -> Self {
        Self { sentiment, quote }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_sentiment_json_shape() {
        let result = QuotedSentiment::new(
            SentimentLabel::from_raw("positive"),
            Quote::new("Stay hungry.", "Anon"),
        );
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"sentiment":"Positive","quote":{"text":"Stay hungry.","author":"Anon"}}"#
        );
    }

    #[test]
    fn test_quote_display() {
        let quote = Quote::new("Be yourself.", "Oscar Wilde");
        assert_eq!(quote.to_string(), "\"Be yourself.\" - Oscar Wilde");
    }
}
