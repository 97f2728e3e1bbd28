//! Route handlers.

use super::dto::{MessageResponse, PredictRequest, PredictResponse};
use super::error::ApiError;
use super::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

/// `GET /`: liveness check, independent of model and quote service state
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::live())
}

/// `POST /predict`: classify text and attach a random quote
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload?;
    let result = state.use_case.execute(&request.text).await?;
    Ok(Json(result.into()))
}
