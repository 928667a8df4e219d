// src/models/waitlist.rs
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WaitlistEntry {
    pub id: i32,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

/// A validated signup that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewWaitlistEntry {
    pub email: String,
}
