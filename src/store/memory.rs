// src/store/memory.rs

use std::sync::{
    RwLock,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    models::{
        enquiry::Enquiry,
        result::{StoredResult, TestResult},
    },
    store::{EnquiryStore, ResultStore, StoreError, StoreResult},
};

/// Process-local store used when no database is configured, and in tests.
///
/// `set_available(false)` makes every call fail with `Unavailable`.
#[derive(Debug)]
pub struct MemoryStore {
    results: RwLock<Vec<StoredResult>>,
    enquiries: RwLock<Vec<Enquiry>>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            results: RwLock::new(Vec::new()),
            enquiries: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn result_count(&self) -> usize {
        self.results.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn enquiry_count(&self) -> usize {
        self.enquiries.read().map(|e| e.len()).unwrap_or(0)
    }

    fn check(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store switched off".to_string()))
        }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn save_result(&self, result: &TestResult) -> StoreResult<StoredResult> {
        self.check()?;
        let stored = StoredResult {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            result: result.clone(),
        };
        self.results.write().map_err(poisoned)?.push(stored.clone());
        Ok(stored)
    }

    async fn list_results(&self) -> StoreResult<Vec<StoredResult>> {
        self.check()?;
        let mut results = self.results.read().map_err(poisoned)?.clone();
        results.reverse();
        Ok(results)
    }

    async fn delete_result(&self, id: Uuid) -> StoreResult<()> {
        self.check()?;
        let mut results = self.results.write().map_err(poisoned)?;
        let before = results.len();
        results.retain(|r| r.id != id);
        if results.len() == before {
            return Err(StoreError::NotFound(format!("Result {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl EnquiryStore for MemoryStore {
    async fn save_enquiry(&self, payload: Map<String, Value>) -> StoreResult<Enquiry> {
        self.check()?;
        let enquiry = Enquiry {
            id: Uuid::new_v4(),
            payload,
            created_at: Utc::now(),
        };
        self.enquiries.write().map_err(poisoned)?.push(enquiry.clone());
        Ok(enquiry)
    }
}
