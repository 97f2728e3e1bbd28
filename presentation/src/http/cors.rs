//! Cross-origin layer.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

/// Allow the listed origins with any method and header, credentials included.
///
/// Wildcards cannot be combined with credentials, so methods and headers
/// are mirrored from the preflight request instead.
pub fn cors_layer<S: AsRef<str>>(origins: &[S]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.as_ref()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping invalid CORS origin '{}'", origin.as_ref());
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
