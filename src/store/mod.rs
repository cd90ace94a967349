// src/store/mod.rs

//! Storage ports for results and enquiries, plus the adapters behind them.

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{
    enquiry::Enquiry,
    result::{StoredResult, TestResult},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug)]
pub enum StoreError {
    NotFound(String),
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(what) => write!(f, "{} not found", what),
            StoreError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The "results" collection.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn save_result(&self, result: &TestResult) -> StoreResult<StoredResult>;

    /// Every stored result, newest first.
    async fn list_results(&self) -> StoreResult<Vec<StoredResult>>;

    async fn delete_result(&self, id: Uuid) -> StoreResult<()>;
}

/// The "enquiries" collection.
#[async_trait]
pub trait EnquiryStore: Send + Sync {
    async fn save_enquiry(&self, payload: Map<String, Value>) -> StoreResult<Enquiry>;
}
