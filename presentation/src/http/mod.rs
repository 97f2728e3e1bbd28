//! HTTP API (axum).
//!
//! ```text
//! GET  /         -> 200 {"message": "API is live and ready!"}
//! POST /predict  -> 200 {"sentiment": "...", "quote": {"text": "...", "author": "..."}}
//!                   400 empty text | 422 malformed body
//!                   500 prediction failure | 502 quote service failure
//! ```

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use cors::cors_layer;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
