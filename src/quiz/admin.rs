// src/quiz/admin.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::result::{AdminResultEntry, StoredResult},
    store::{ResultStore, StoreError},
};

#[derive(Debug)]
pub enum AdminError {
    /// Deletion was requested without explicit confirmation.
    NotConfirmed,
    Store(StoreError),
}

impl From<StoreError> for AdminError {
    fn from(err: StoreError) -> Self {
        AdminError::Store(err)
    }
}

/// Snapshot of stored results taken at load time. Not kept in sync with storage.
pub struct AdminViewer {
    store: Arc<dyn ResultStore>,
    results: Vec<StoredResult>,
}

impl AdminViewer {
    pub async fn load(store: Arc<dyn ResultStore>) -> Result<Self, StoreError> {
        let results = store.list_results().await?;
        Ok(Self { store, results })
    }

    pub fn results(&self) -> &[StoredResult] {
        &self.results
    }

    pub fn entries(&self) -> Vec<AdminResultEntry> {
        self.results.iter().map(AdminResultEntry::from).collect()
    }

    /// Removes a result from storage, then from the snapshot.
    /// On failure the snapshot is left as it was.
    pub async fn delete_result(&mut self, id: Uuid, confirmed: bool) -> Result<(), AdminError> {
        if !confirmed {
            return Err(AdminError::NotConfirmed);
        }
        self.store.delete_result(id).await?;
        self.results.retain(|r| r.id != id);
        Ok(())
    }
}

/// Deletes one record without loading a snapshot first.
pub async fn delete_confirmed(
    store: &dyn ResultStore,
    id: Uuid,
    confirmed: bool,
) -> Result<(), AdminError> {
    if !confirmed {
        return Err(AdminError::NotConfirmed);
    }
    store.delete_result(id).await?;
    tracing::info!("Deleted result {}", id);
    Ok(())
}
