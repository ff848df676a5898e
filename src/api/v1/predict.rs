//! JSON prediction endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, PredictRequest, PredictResponse};

/// POST /v1/predict
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(metrics) = payload?;
    debug!(?metrics, "Prediction requested");

    let (features, score) = state.score(&metrics)?;
    info!(score, model = state.predictor().kind(), "Prediction served");

    Ok(Json(PredictResponse::new(
        &features,
        score,
        state.predictor().kind(),
    )))
}
