//! Mapping of application errors onto HTTP responses.

use super::dto::ErrorBody;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sentiquote_application::GenerateQuoteError;
use tracing::{error, warn};

/// An error ready to be sent to the caller as `{"detail": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<GenerateQuoteError> for ApiError {
    fn from(err: GenerateQuoteError) -> Self {
        let status = match &err {
            GenerateQuoteError::Validation(_) => StatusCode::BAD_REQUEST,
            GenerateQuoteError::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GenerateQuoteError::QuoteFetch(_) => StatusCode::BAD_GATEWAY,
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Malformed JSON is reported like a schema mismatch
        let status = match &rejection {
            JsonRejection::JsonSyntaxError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rejection.status(),
        };
        Self::new(status, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, "{}", self.detail);
        } else {
            warn!(status = %self.status, "{}", self.detail);
        }
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiquote_application::{PredictionError, QuoteFetchError};
    use sentiquote_domain::DomainError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                GenerateQuoteError::Validation(DomainError::EmptyInput),
                StatusCode::BAD_REQUEST,
                "Input cannot be empty.",
            ),
            (
                GenerateQuoteError::Prediction(PredictionError::new("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Prediction failed: boom",
            ),
            (
                GenerateQuoteError::QuoteFetch(QuoteFetchError::Status(503)),
                StatusCode::BAD_GATEWAY,
                "Could not fetch quote.",
            ),
            (
                GenerateQuoteError::QuoteFetch(QuoteFetchError::UnexpectedFormat),
                StatusCode::BAD_GATEWAY,
                "Unexpected quote format.",
            ),
        ];

        for (err, status, detail) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status(), status);
            assert_eq!(api.detail(), detail);
        }
    }
}
