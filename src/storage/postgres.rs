// src/storage/postgres.rs
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use super::WaitlistStore;
use crate::error::AppError;
use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};

/// Waitlist backed by the `waitlist` table (see `database::init_schema`).
/// The UNIQUE constraint on `email` makes `add_if_absent` atomic.
#[derive(Clone)]
pub struct PgWaitlistStore {
    pool: PgPool,
}

impl PgWaitlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WaitlistStore for PgWaitlistStore {
    #[instrument(skip(self))]
    async fn is_email_registered(&self, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM waitlist WHERE email = $1)"
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[instrument(skip(self, entry))]
    async fn add_to_waitlist(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, AppError> {
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            "INSERT INTO waitlist (email) VALUES ($1)
             RETURNING id, email, joined_at"
        )
        .bind(&entry.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.code().as_deref() == Some("23505") {
                    return AppError::conflict("This email is already registered");
                }
            }
            AppError::db(e)
        })?;

        Ok(rec)
    }

    #[instrument(skip(self, entry))]
    async fn add_if_absent(&self, entry: NewWaitlistEntry) -> Result<Option<WaitlistEntry>, AppError> {
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            "INSERT INTO waitlist (email) VALUES ($1)
             ON CONFLICT (email) DO NOTHING
             RETURNING id, email, joined_at"
        )
        .bind(&entry.email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rec)
    }
}
