//! API layer - HTTP handlers and routing
//!
//! Routes:
//! - GET  /                    - liveness message
//! - GET  /test                - database diagnostics
//! - GET  /api/pricing         - pricing plans
//! - POST /api/auth/register   - demo registration
//! - POST /api/auth/login      - demo login stub
//! - POST /api/contact         - contact form
//! - GET  /api/blog            - published blog posts

pub mod auth;
pub mod blog;
pub mod contact;
pub mod error;
pub mod site;
pub mod state;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{ApiError, ApiErrorDetail};
pub use state::AppState;

/// Build the `/api` router
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .route("/pricing", get(site::get_pricing))
        .nest("/auth", auth::router())
        .route("/contact", post(contact::submit_contact))
        .route("/blog", get(blog::list_posts))
}

/// CORS layer for the configured origin.
///
/// `*` allows any origin without credentials; a concrete origin also allows
/// credentials.
pub fn cors_layer(cors_origin: &str) -> CorsLayer {
    if cors_origin.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        Err(e) => {
            tracing::warn!("Invalid CORS origin {:?} ({}), allowing any origin", cors_origin, e);
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    Router::new()
        .route("/", get(site::root))
        .route("/test", get(site::test_database))
        .nest("/api", build_api_router())
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
