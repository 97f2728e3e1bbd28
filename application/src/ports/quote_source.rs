//! Quote source port
//!
//! Defines the interface for fetching a random quote from an external
//! service. Adapters wrap a concrete HTTP API; a retrying decorator can
//! implement the same trait around another source.

use async_trait::async_trait;
use sentiquote_domain::Quote;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching a quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteFetchError {
    #[error("Quote fetch failed: request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("Quote fetch failed: {0}")]
    Transport(String),

    /// The service answered with a status other than 200
    #[error("Could not fetch quote.")]
    Status(u16),

    /// The body was not a non-empty array of `{q, a}` objects
    #[error("Unexpected quote format.")]
    UnexpectedFormat,
}

/// Source of random quotes
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch one random quote, giving up after `timeout`.
    async fn fetch_random(&self, timeout: Duration) -> Result<Quote, QuoteFetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QuoteFetchError::Timeout(Duration::from_secs(10)).to_string(),
            "Quote fetch failed: request timed out after 10s"
        );
        assert_eq!(
            QuoteFetchError::Transport("connection refused".to_string()).to_string(),
            "Quote fetch failed: connection refused"
        );
        assert_eq!(QuoteFetchError::Status(500).to_string(), "Could not fetch quote.");
        assert_eq!(
            QuoteFetchError::UnexpectedFormat.to_string(),
            "Unexpected quote format."
        );
    }
}
