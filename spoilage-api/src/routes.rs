//! Route configuration for the spoilage API

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Analyzer
        .route("/analyze", post(handlers::analyze_handler))

        // Relay and dataset
        .route("/api/simulate", post(handlers::simulate_handler))
        .route("/api/dataset", get(handlers::dataset_handler))

        // Health check
        .route("/health", get(handlers::health_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
