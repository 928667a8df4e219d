use axum::{routing::post, Router};
use crate::handlers::waitlist::join_waitlist;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/waitlist", post(join_waitlist))
}
