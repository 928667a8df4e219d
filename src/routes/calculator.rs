use axum::{routing::post, Router};
use crate::handlers::calculator::calculate;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/calculate", post(calculate))
}
