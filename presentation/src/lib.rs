//! Presentation layer for sentiquote
//!
//! This crate contains the HTTP API (axum router, handlers, error mapping)
//! and the command-line interface definition.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, cors_layer, create_router};
