//! Core domain concepts shared across all subdomains.
//!
//! - [`input::UserInput`] - validated, trimmed text submitted by a caller
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod input;
pub mod string;
