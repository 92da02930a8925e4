//! Request handlers for API endpoints

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use spoilage_core::{DatasetRow, GasReading, LedStatus, classify};

use crate::error::ApiFailure;
use crate::models::*;
use crate::state::AppState;

// ============================================================================
// Handler Functions
// ============================================================================

/// Classify a reading with the local threshold classifier
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body = GasReading,
    responses(
        (status = 200, description = "LED states and food verdict", body = LedStatus),
        (status = 400, description = "Missing field or invalid reading", body = ErrorBody),
    )
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<GasReading>, JsonRejection>,
) -> Result<Json<LedStatus>, ApiFailure> {
    let Json(reading) = payload?;
    let status = classify(&reading, &state.thresholds)?;

    tracing::info!(?reading, ?status, "reading analyzed");
    Ok(Json(status))
}

/// Forward a reading to the configured analyzer and return its verdict
#[utoipa::path(
    post,
    path = "/api/simulate",
    tag = "relay",
    request_body = GasReading,
    responses(
        (status = 200, description = "Verdict from the analyzer", body = LedStatus),
        (status = 400, description = "Missing field or invalid reading", body = ErrorBody),
        (status = 502, description = "Analyzer unreachable or failed", body = ErrorBody),
    )
)]
pub async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GasReading>, JsonRejection>,
) -> Result<Json<LedStatus>, ApiFailure> {
    let Json(reading) = payload?;
    reading.validate()?;

    tracing::info!(?reading, upstream = state.relay().analyze_url(), "received gas readings");
    let status = state.relay().forward(&reading).await?;
    tracing::info!(?status, "analysis result");

    Ok(Json(status))
}

/// Reference dataset of labeled readings
#[utoipa::path(
    get,
    path = "/api/dataset",
    tag = "dataset",
    responses(
        (status = 200, description = "All dataset rows in file order", body = [DatasetRow]),
        (status = 500, description = "Dataset failed to load", body = ErrorBody),
    )
)]
pub async fn dataset_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DatasetRow>>, ApiFailure> {
    match state.dataset() {
        Ok(rows) => Ok(Json(rows.to_vec())),
        Err(err) => Err(ApiFailure::DatasetUnavailable(err.to_string())),
    }
}

/// Health check endpoint for monitoring
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthCheck),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthCheck> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    Json(HealthCheck {
        status: "OK",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        thresholds: state.thresholds,
        dataset_rows: state.dataset().ok().map(<[DatasetRow]>::len),
        timestamp,
    })
}
