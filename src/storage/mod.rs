// src/storage/mod.rs
//! Waitlist persistence behind a swappable trait.
//!
//! Handlers only see `Arc<dyn WaitlistStore>`, so the in-memory store used in
//! development and tests can be replaced by the PostgreSQL one without
//! touching callers.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};

pub use memory::MemoryWaitlistStore;
pub use postgres::PgWaitlistStore;

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Exact, case-sensitive match on the stored email.
    async fn is_email_registered(&self, email: &str) -> Result<bool, AppError>;

    /// Stores the entry with the next id and the current time.
    ///
    /// Does not look for an existing registration. Pairing this with
    /// `is_email_registered` is a check-then-insert and can race; use
    /// `add_if_absent` when duplicates must be impossible.
    async fn add_to_waitlist(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, AppError>;

    /// Atomically stores the entry unless its email is already present.
    /// Returns `None` for a duplicate.
    async fn add_if_absent(&self, entry: NewWaitlistEntry) -> Result<Option<WaitlistEntry>, AppError>;
}
