//! Quote subdomain: quotes and the combined sentiment/quote result.

pub mod entities;
