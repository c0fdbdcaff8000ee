//! Response types for the Severance Engine API.
//!
//! This module defines the success envelopes, the error response structure
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditStep, CalculationResult, ReconciliationResult};

/// Response body for a successful `/calculate` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The crate version that produced the result.
    pub engine_version: String,
    /// The calculated figures.
    pub result: CalculationResult,
    /// How each figure was derived.
    pub audit_trace: Vec<AuditStep>,
}

/// Response body for a successful `/reconcile` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The crate version that produced the result.
    pub engine_version: String,
    /// The calculated figures.
    pub result: CalculationResult,
    /// Calculated, paid and remaining balances.
    pub reconciliation: ReconciliationResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidSalary { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SALARY",
                    message,
                    "Salary must be at least one currency unit and small enough to calculate",
                ),
            },
            EngineError::DateTooEarly { earliest, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DATE_TOO_EARLY",
                    message,
                    format!("{} is the earliest possible date", earliest),
                ),
            },
            EngineError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    "The end date needs to be after the start date",
                ),
            },
            EngineError::InvalidDate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    "Dates must use the YYYY-MM-DD format",
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_salary_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidSalary {
            salary: Decimal::ZERO,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SALARY");
    }

    #[test]
    fn test_date_too_early_names_the_epoch() {
        let api_error: ApiErrorResponse = EngineError::DateTooEarly {
            start_date: NaiveDate::from_ymd_opt(2019, 5, 1).unwrap(),
            earliest: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.error.code, "DATE_TOO_EARLY");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("2020-01-01 is the earliest possible date")
        );
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
