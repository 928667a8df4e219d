// src/storage/memory.rs
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::WaitlistStore;
use crate::error::AppError;
use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};

struct Inner {
    entries: BTreeMap<i32, WaitlistEntry>,
    next_id: i32,
}

impl Inner {
    fn contains(&self, email: &str) -> bool {
        self.entries.values().any(|entry| entry.email == email)
    }

    fn insert(&mut self, new_entry: NewWaitlistEntry) -> WaitlistEntry {
        let id = self.next_id;
        self.next_id += 1;
        let entry = WaitlistEntry {
            id,
            email: new_entry.email,
            joined_at: Utc::now(),
        };
        self.entries.insert(id, entry.clone());
        entry
    }
}

/// Process-local store. Contents are lost on restart.
pub struct MemoryWaitlistStore {
    inner: Mutex<Inner>,
}

impl MemoryWaitlistStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot in id order.
    pub fn entries(&self) -> Vec<WaitlistEntry> {
        self.inner.lock().entries.values().cloned().collect()
    }
}

impl Default for MemoryWaitlistStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WaitlistStore for MemoryWaitlistStore {
    async fn is_email_registered(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.inner.lock().contains(email))
    }

    async fn add_to_waitlist(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, AppError> {
        Ok(self.inner.lock().insert(entry))
    }

    async fn add_if_absent(&self, entry: NewWaitlistEntry) -> Result<Option<WaitlistEntry>, AppError> {
        // Check and insert under one lock.
        let mut inner = self.inner.lock();
        if inner.contains(&entry.email) {
            return Ok(None);
        }
        Ok(Some(inner.insert(entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_entry(email: &str) -> NewWaitlistEntry {
        NewWaitlistEntry { email: email.to_string() }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let store = MemoryWaitlistStore::new();
        let a = store.add_to_waitlist(new_entry("a@example.com")).await.unwrap();
        let b = store.add_to_waitlist(new_entry("b@example.com")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.email, "a@example.com");
        assert!(b.joined_at >= a.joined_at);
        assert_eq!(store.entries(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_is_email_registered_is_exact() {
        let store = MemoryWaitlistStore::new();
        assert!(!store.is_email_registered("a@example.com").await.unwrap());

        store.add_to_waitlist(new_entry("a@example.com")).await.unwrap();

        assert!(store.is_email_registered("a@example.com").await.unwrap());
        assert!(!store.is_email_registered("A@example.com").await.unwrap());
        assert!(!store.is_email_registered("a@example.co").await.unwrap());
    }

    #[tokio::test]
    async fn test_add_to_waitlist_does_not_dedupe() {
        let store = MemoryWaitlistStore::new();
        store.add_to_waitlist(new_entry("a@example.com")).await.unwrap();
        let again = store.add_to_waitlist(new_entry("a@example.com")).await.unwrap();

        assert_eq!(again.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_add_if_absent_rejects_duplicate() {
        let store = MemoryWaitlistStore::new();
        let first = store.add_if_absent(new_entry("a@example.com")).await.unwrap();
        let second = store.add_if_absent(new_entry("a@example.com")).await.unwrap();

        assert_eq!(first.map(|e| e.id), Some(1));
        assert!(second.is_none());
        assert_eq!(store.len(), 1);

        // A rejected insert does not consume an id.
        let next = store.add_if_absent(new_entry("b@example.com")).await.unwrap();
        assert_eq!(next.map(|e| e.id), Some(2));
    }

    #[tokio::test]
    async fn test_concurrent_add_if_absent_keeps_one() {
        let store = Arc::new(MemoryWaitlistStore::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.add_if_absent(new_entry("race@example.com")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_some() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.len(), 1);
    }
}
