//! Quote fetch policy: how the use case calls the quote source.
//!
//! [`QuoteFetchPolicy`] groups the static parameters handed to
//! [`QuoteSource::fetch_random`](crate::ports::quote_source::QuoteSource::fetch_random).
//! There is no retry budget: a single attempt is made per request.

use std::time::Duration;

/// Default outbound timeout for the quote service.
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Parameters for the outbound quote fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteFetchPolicy {
    /// Upper bound for the whole request, connect through body read.
    pub timeout: Duration,
}

impl Default for QuoteFetchPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_QUOTE_TIMEOUT,
        }
    }
}

impl QuoteFetchPolicy {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
