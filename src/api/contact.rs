//! Contact form endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppState};
use crate::models::ContactMessage;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(msg): Json<ContactMessage>,
) -> Result<Json<ContactResponse>, ApiError> {
    state.contact_service.submit(&msg).await?;

    Ok(Json(ContactResponse {
        message: "Thanks! We'll be in touch.".to_string(),
    }))
}
