//! Domain layer for sentiquote
//!
//! This crate contains the value objects shared by every other layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **UserInput**: trimmed, non-empty text submitted for analysis
//! - **SentimentLabel**: the classifier's verdict in display form ("Positive")
//! - **Quote**: an inspirational quote and its author
//! - **QuotedSentiment**: the combined result returned to callers

pub mod core;
pub mod quote;
pub mod sentiment;

// Re-export commonly used types
pub use crate::core::{error::DomainError, input::UserInput};
pub use quote::entities::{Quote, QuotedSentiment};
pub use sentiment::label::SentimentLabel;
