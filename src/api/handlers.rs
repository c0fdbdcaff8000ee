//! HTTP request handlers for the Severance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{SeveranceEngine, reconcile};
use crate::error::EngineError;

use super::request::{CalculationRequest, ReconciliationRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, ReconciliationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/reconcile", post(reconcile_handler))
        .route("/config", get(config_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Builds an engine from the request and returns every figure with its
/// audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let engine = match request
        .to_input(state.config())
        .and_then(|input| SeveranceEngine::new(input, state.config()))
    {
        Ok(engine) => engine,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let result = engine.result();
    info!(
        correlation_id = %correlation_id,
        days_worked = result.days_worked,
        total = %result.total,
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            audit_trace: engine.audit_trace(),
            result,
        },
    )
}

/// Handler for POST /reconcile endpoint.
///
/// Recomputes the period from the request and subtracts the deductions.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconciliationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconciliation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let engine = match request
        .to_input(state.config())
        .and_then(|input| SeveranceEngine::new(input, state.config()))
    {
        Ok(engine) => engine,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let reconciliation = reconcile(&engine, &request.deductions);
    info!(
        correlation_id = %correlation_id,
        total_remaining = %reconciliation.total_remaining,
        warnings = reconciliation.warnings.len(),
        "Reconciliation completed"
    );

    json_response(
        StatusCode::OK,
        ReconciliationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result: engine.result(),
            reconciliation,
        },
    )
}

/// Handler for GET /config endpoint.
async fn config_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().clone())
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            salary: Some(Decimal::from(1_000_000)),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-07-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(AppState::default());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, body) = post_json(router, "/calculate", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: CalculationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.result.days_worked, 181);
        assert_eq!(response.result.total, Decimal::from(1_287_278));
        assert_eq!(response.audit_trace.len(), 6);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(AppState::default());

        let (status, body) = post_json(router, "/calculate", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_start_date_returns_validation_error() {
        let router = create_router(AppState::default());
        let body = r#"{"salary": 1000000, "end_date": "2023-07-01"}"#.to_string();

        let (status, body) = post_json(router, "/calculate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("start_date"));
    }

    #[tokio::test]
    async fn test_configured_epoch_is_enforced() {
        let config = EngineConfig::default()
            .with_earliest_eligible_date(crate::config::earliest_eligible_date_2023());
        let router = create_router(AppState::new(config));
        let mut request = create_valid_request();
        request.start_date = "2022-12-31".to_string();

        let (status, body) =
            post_json(router, "/calculate", serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "DATE_TOO_EARLY");
    }

    #[tokio::test]
    async fn test_reconcile_returns_balances() {
        let router = create_router(AppState::default());
        let body = serde_json::json!({
            "salary": 1000000,
            "start_date": "2023-01-01",
            "end_date": "2023-12-27",
            "deductions": {"primas": 1200000}
        })
        .to_string();

        let (status, body) = post_json(router, "/reconcile", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: ReconciliationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.reconciliation.primas.remaining, Decimal::from(-200_000));
        assert_eq!(response.reconciliation.warnings.len(), 1);
    }
}
