// src/state.rs
use std::sync::Arc;

use crate::storage::WaitlistStore;

#[derive(Clone)]
pub struct AppState {
    pub waitlist: Arc<dyn WaitlistStore>,
}

impl AppState {
    pub fn new(waitlist: Arc<dyn WaitlistStore>) -> Self {
        Self { waitlist }
    }
}
