//! Failures surfaced by the HTTP handlers

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use spoilage_core::SpoilageError;
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiFailure {
    /// Body missing, not JSON, or not a valid reading
    #[error("{0}")]
    BadRequest(String),

    /// Remote analyzer unreachable, timed out, failed, or returned garbage
    #[error("{0}")]
    Upstream(String),

    /// Dataset could not be loaded at startup
    #[error("{0}")]
    DatasetUnavailable(String),
}

impl ApiFailure {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiFailure::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiFailure::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiFailure::DatasetUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short summary placed in the `error` field
    pub fn title(&self) -> &'static str {
        match self {
            ApiFailure::BadRequest(_) => "Invalid gas reading",
            ApiFailure::Upstream(_) => "Failed to analyze gas readings",
            ApiFailure::DatasetUnavailable(_) => "Failed to load dataset",
        }
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        ApiFailure::BadRequest(rejection.body_text())
    }
}

impl From<SpoilageError> for ApiFailure {
    fn from(err: SpoilageError) -> Self {
        match err {
            SpoilageError::InvalidReading { .. } => ApiFailure::BadRequest(err.to_string()),
            other => ApiFailure::DatasetUnavailable(other.to_string()),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "{}", self.title());
        } else {
            tracing::warn!(error = %self, "{}", self.title());
        }

        let body = ErrorBody {
            error: self.title().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spoilage_core::Gas;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiFailure::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiFailure::Upstream("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ApiFailure::DatasetUnavailable("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_reading_is_bad_request() {
        let failure: ApiFailure = SpoilageError::InvalidReading {
            gas: Gas::Nh3,
            value: -1.0,
        }
        .into();
        assert!(matches!(failure, ApiFailure::BadRequest(ref m) if m.contains("NH3")));
    }
}
