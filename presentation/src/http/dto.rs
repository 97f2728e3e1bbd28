//! Request and response bodies for the HTTP API.

use sentiquote_domain::{Quote, QuotedSentiment};
use serde::{Deserialize, Serialize};

/// Liveness message returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "API is live and ready!";

/// `POST /predict` request body
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

/// `POST /predict` success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub sentiment: String,
    pub quote: QuoteDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDto {
    pub text: String,
    pub author: String,
}

impl From<Quote> for QuoteDto {
    fn from(quote: Quote) -> Self {
        Self {
            text: quote.text,
            author: quote.author,
        }
    }
}

impl From<QuotedSentiment> for PredictResponse {
    fn from(result: QuotedSentiment) -> Self {
        Self {
            sentiment: result.sentiment.into_string(),
            quote: result.quote.into(),
        }
    }
}

/// `GET /` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn live() -> Self {
        Self {
            message: LIVENESS_MESSAGE.to_string(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
