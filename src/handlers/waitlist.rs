// src/handlers/waitlist.rs
use axum::extract::{rejection::JsonRejection, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, instrument, warn};

use crate::dtos::waitlist::{JoinWaitlistRequest, WaitlistEntryResponse};
use crate::error::AppError;
use crate::state::AppState;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already registered";

// POST /api/waitlist - Join the waitlist
#[instrument(skip(state, payload))]
pub async fn join_waitlist(
    State(state): State<AppState>,
    payload: Result<Json<JoinWaitlistRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WaitlistEntryResponse>), AppError> {
    let Json(payload) = payload?;
    let new_entry = payload.into_new_entry()?;

    // Single atomic insert-if-absent; a separate lookup would race.
    let entry = state
        .waitlist
        .add_if_absent(new_entry)
        .await?
        .ok_or_else(|| {
            warn!("Duplicate waitlist signup rejected");
            AppError::conflict(DUPLICATE_EMAIL_MESSAGE)
        })?;

    info!(id = entry.id, "New waitlist signup");

    Ok((StatusCode::CREATED, Json(WaitlistEntryResponse::from(entry))))
}
