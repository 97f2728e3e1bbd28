//! Application layer for sentiquote
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_QUOTE_TIMEOUT, QuoteFetchPolicy};
pub use ports::{
    quote_source::{QuoteFetchError, QuoteSource},
    sentiment_classifier::{PredictionError, SentimentClassifier},
};
pub use use_cases::generate_quote::{GenerateQuoteError, GenerateQuoteUseCase};
