pub mod waitlist;
pub mod calculator;

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(waitlist::routes())
        .merge(calculator::routes())
}

/// Full application: API routes plus the service banner and health check.
pub fn create_app(state: AppState) -> Router {
    create_router()
        .route("/", get(|| async { "ProfitDesk API" }))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Allows a single origin when given, any origin otherwise.
pub fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}

async fn health_check() -> &'static str {
    "OK"
}
