use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::error::Result;
use crate::features::FeatureVector;
use crate::models::{PredictionRequest, PredictionResponse};

/// Predict pitting potential for one alloy/environment combination
#[utoipa::path(
    post,
    path = "/api/v1/predict",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Prediction generated", body = PredictionResponse),
        (status = 400, description = "Input outside the documented field ranges"),
        (status = 500, description = "Inference failed against the loaded artifacts")
    )
)]
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>> {
    let features: FeatureVector = request.into();
    let prediction = state.service.predict(&features)?;

    Ok(Json(PredictionResponse::new(
        prediction.potential_mv,
        prediction.band,
    )))
}
