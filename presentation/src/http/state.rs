//! Shared handler state.

use sentiquote_application::GenerateQuoteUseCase;
use std::sync::Arc;

/// Immutable context built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<GenerateQuoteUseCase>,
}

impl AppState {
    pub fn new(use_case: GenerateQuoteUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }
}
