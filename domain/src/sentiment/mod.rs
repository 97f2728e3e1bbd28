//! Sentiment subdomain.

pub mod label;
