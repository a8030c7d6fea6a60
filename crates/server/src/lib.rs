//! HTTP service for Schedule C / Schedule E
//!
//! Routes:
//! - `GET  /` and `GET /health`
//! - `POST /generate-schedule-c`, `POST /generate-schedule-e` (PDF bytes)
//! - `POST /generate-pdf` (Schedule C, kept for older clients)
//! - `POST /calculate-schedule-c`, `POST /calculate-schedule-e` (totals JSON)

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health_check))
        .route("/generate-schedule-c", post(api::generate_schedule_c))
        .route("/generate-schedule-e", post(api::generate_schedule_e))
        .route("/generate-pdf", post(api::generate_schedule_c))
        .route("/calculate-schedule-c", post(api::calculate_schedule_c))
        .route("/calculate-schedule-e", post(api::calculate_schedule_e))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the configured origins, with credentials
///
/// Credentials rule out wildcard methods and headers, so requested ones are
/// mirrored back instead.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
