//! Data models for API responses
//!
//! Readings, LED states and dataset rows travel in their `spoilage-core`
//! wire shape; only the envelopes specific to HTTP live here.

use serde::{Deserialize, Serialize};
use spoilage_core::GasThresholds;
use utoipa::ToSchema;

/// Error information in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Short summary of what failed
    #[schema(example = "Failed to analyze gas readings")]
    pub error: String,

    /// Human-readable detail
    #[schema(example = "Analyzer responded with status: 500 Internal Server Error")]
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    #[schema(example = "OK")]
    pub status: &'static str,

    #[schema(example = "spoilage-api")]
    pub service: &'static str,

    /// Service version
    #[schema(example = "2026.10.19")]
    pub version: &'static str,

    /// Thresholds used by the local analyzer
    pub thresholds: GasThresholds,

    /// Rows in the reference dataset, absent if it failed to load
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 40)]
    pub dataset_rows: Option<usize>,

    /// Seconds since the Unix epoch
    #[schema(example = 1792400000)]
    pub timestamp: u64,
}
