//! HTTP API module for the Severance Engine.
//!
//! This module provides the REST API endpoints for calculating and
//! reconciling a liquidación.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ReconciliationRequest};
pub use response::{ApiError, CalculationResponse, ReconciliationResponse};
pub use state::AppState;
