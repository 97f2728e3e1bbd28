//! Quote service adapters.

pub mod zenquotes;

pub use zenquotes::{DEFAULT_QUOTE_URL, ZenQuotesClient};
