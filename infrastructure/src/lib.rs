//! Infrastructure layer for sentiquote
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod model;
pub mod quotes;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileCorsConfig, FileModelConfig, FileQuotesConfig,
    FileServerConfig, Severity,
};
pub use model::{ArtifactSentimentModel, ModelLoadError};
pub use quotes::{DEFAULT_QUOTE_URL, ZenQuotesClient};
