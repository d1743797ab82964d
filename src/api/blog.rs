//! Blog listing endpoint

use axum::{extract::State, Json};

use crate::api::{ApiError, AppState};
use crate::models::BlogPost;

/// GET /api/blog
///
/// Published posts, or the demo post when the store is down and the
/// fallback policy is on.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.blog_service.list_published().await?;
    Ok(Json(posts))
}
