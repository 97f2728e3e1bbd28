//! Generate Quote use case.
//!
//! Classifies the sentiment of caller text and pairs it with a random quote.
//!
//! The flow is strictly linear (Validate → Predict → FetchQuote → Assemble)
//! and the first failing step ends the request. Nothing is retried and no
//! partial result is ever returned.

use crate::config::QuoteFetchPolicy;
use crate::ports::quote_source::{QuoteFetchError, QuoteSource};
use crate::ports::sentiment_classifier::{PredictionError, SentimentClassifier};
use sentiquote_domain::core::string::truncate;
use sentiquote_domain::{DomainError, QuotedSentiment, SentimentLabel, UserInput};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during quote generation.
///
/// Each variant corresponds to one step of the flow; the HTTP layer maps
/// them to status codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateQuoteError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    QuoteFetch(#[from] QuoteFetchError),
}

/// Use case for producing a [`QuotedSentiment`] from raw caller text.
///
/// Holds the read-only classifier loaded at startup and the quote source.
/// Cheap to share: wrap it in an `Arc` and call [`execute`](Self::execute)
/// from any number of concurrent requests.
pub struct GenerateQuoteUseCase {
    classifier: Arc<dyn SentimentClassifier>,
    quotes: Arc<dyn QuoteSource>,
    policy: QuoteFetchPolicy,
}

impl GenerateQuoteUseCase {
    pub fn new(classifier: Arc<dyn SentimentClassifier>, quotes: Arc<dyn QuoteSource>) -> Self {
        Self {
            classifier,
            quotes,
            policy: QuoteFetchPolicy::default(),
        }
    }

    /// Replace the default fetch policy.
    pub fn with_policy(mut self, policy: QuoteFetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the full flow for one request.
    pub async fn execute(&self, raw_text: &str) -> Result<QuotedSentiment, GenerateQuoteError> {
        // Validate
        let input = UserInput::try_new(raw_text).inspect_err(|_| {
            debug!("Rejected empty input");
        })?;
        debug!("Classifying input: {}", truncate(input.text(), 80));

        // Predict
        let raw_label = self.classifier.predict(input.text()).inspect_err(|e| {
            warn!("Sentiment prediction failed: {}", e.message());
        })?;
        let sentiment = SentimentLabel::from_raw(&raw_label);
        debug!("Predicted sentiment: {}", sentiment);

        // FetchQuote
        let quote = self
            .quotes
            .fetch_random(self.policy.timeout)
            .await
            .inspect_err(|e| {
                warn!("Quote fetch failed: {:?}", e);
            })?;
        debug!("Fetched quote by {}", quote.author);

        // Assemble
        info!("Generated {} quote", sentiment);
        Ok(QuotedSentiment::new(sentiment, quote))
    }
}
