//! Public site endpoints
//!
//! - GET / - liveness message
//! - GET /api/pricing - static plan catalogue
//! - GET /test - database diagnostics, never fails

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::models::PricingPlan;
use crate::services::{diagnostics, pricing, DiagnosticReport};

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "SaaS Landing Backend Running".to_string(),
    })
}

/// GET /api/pricing
pub async fn get_pricing() -> Json<Vec<PricingPlan>> {
    Json(pricing::plans())
}

/// GET /test
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(diagnostics::inspect(&state.store).await)
}
