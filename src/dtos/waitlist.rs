// src/dtos/waitlist.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};
use crate::validation::{FieldRule, FieldValue, Validate, WAITLIST_RULES};

#[derive(Debug, Deserialize)]
pub struct JoinWaitlistRequest {
    pub email: Option<String>,
}

impl Validate for JoinWaitlistRequest {
    fn rules() -> &'static [FieldRule] {
        WAITLIST_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "email" => self.email.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}

impl JoinWaitlistRequest {
    /// Validates and converts into an entry ready for the store.
    pub fn into_new_entry(self) -> Result<NewWaitlistEntry, crate::error::AppError> {
        self.validate()?;
        let email = self.email.unwrap_or_default();
        Ok(NewWaitlistEntry { email })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryResponse {
    pub id: i32,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl From<WaitlistEntry> for WaitlistEntryResponse {
    fn from(entry: WaitlistEntry) -> Self {
        Self {
            id: entry.id,
            email: entry.email,
            joined_at: entry.joined_at,
        }
    }
}
