//! Authentication API endpoints
//!
//! - POST /api/auth/register - Store a user (placeholder password value)
//! - POST /api/auth/login - Stub, accepts any credentials
//!
//! This is a demo flow. No password is hashed or verified.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppState};
use crate::models::EmailAddress;
use crate::services::Credentials;

/// Request body for registration and login
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: EmailAddress,
    pub password: String,
}

impl From<AuthRequest> for Credentials {
    fn from(req: AuthRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user_email: EmailAddress,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let credentials = Credentials::from(req);
    state.user_service.register(&credentials).await?;

    Ok(Json(AuthResponse {
        message: "Registered successfully".to_string(),
        user_email: credentials.email,
    }))
}

/// POST /api/auth/login
///
/// Always succeeds once the body validates.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Json<AuthResponse> {
    let user_email = state.user_service.login(&Credentials::from(req));

    Json(AuthResponse {
        message: "Logged in".to_string(),
        user_email,
    })
}
