//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied text that is empty once surrounding whitespace
    /// is removed.
    #[error("Input cannot be empty.")]
    EmptyInput,
}
