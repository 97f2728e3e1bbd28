//! Application-level configuration.
//!
//! - [`QuoteFetchPolicy`] - outbound quote fetch parameters (timeout)

pub mod quote_fetch_policy;

pub use quote_fetch_policy::{DEFAULT_QUOTE_TIMEOUT, QuoteFetchPolicy};
