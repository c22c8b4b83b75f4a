use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{form_page, health_check, predict};
use crate::service::PredictionService;

/// Application state for the pitting modeler service.
///
/// Read-only after construction; every submission shares the same loaded
/// artifacts through the service.
pub struct AppState {
    pub service: PredictionService,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self { service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::form::form_page,
        crate::api::handlers::predict::predict,
    ),
    components(schemas(
        crate::models::PredictionRequest,
        crate::models::PredictionResponse,
        crate::models::RiskAssessment,
        crate::classifier::RiskBand,
    )),
    tags(
        (name = "pitting-modeler", description = "Pitting corrosion potential prediction API")
    ),
    info(
        title = "Pitting Modeler API",
        version = "0.1.0",
        description = "Pitting potential prediction and risk banding for candidate alloys"
    )
)]
pub struct ApiDoc;

pub fn create_router(service: PredictionService) -> Router {
    let state = Arc::new(AppState::new(service));

    let api_routes = Router::new()
        .route("/predict", post(predict))
        .with_state(state);

    Router::new()
        .route("/", get(form_page))
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
