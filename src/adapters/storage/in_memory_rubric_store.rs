//! In-Memory Rubric Store Adapter
//!
//! Keeps the live rubric in memory. Useful for tests and single-run use.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::rubric::Rubric;
use crate::ports::{RubricStore, StorageError};

/// In-memory rubric store. `None` means "never saved": loads return the default.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRubricStore {
    rubric: Arc<RwLock<Option<Rubric>>>,
}

impl InMemoryRubricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a rubric.
    pub fn with_rubric(rubric: Rubric) -> Self {
        Self {
            rubric: Arc::new(RwLock::new(Some(rubric))),
        }
    }
}

pub(super) fn built_in_rubric() -> Result<Rubric, StorageError> {
    Rubric::default_rubric().map_err(|e| StorageError::InvalidRubric(e.to_string()))
}

#[async_trait]
impl RubricStore for InMemoryRubricStore {
    async fn load(&self) -> Result<Rubric, StorageError> {
        match self.rubric.read().await.as_ref() {
            Some(rubric) => Ok(rubric.clone()),
            None => built_in_rubric(),
        }
    }

    async fn save(&self, rubric: &Rubric) -> Result<(), StorageError> {
        rubric
            .validate()
            .map_err(|e| StorageError::InvalidRubric(e.to_string()))?;
        *self.rubric.write().await = Some(rubric.clone());
        Ok(())
    }

    async fn reset(&self) -> Result<Rubric, StorageError> {
        *self.rubric.write().await = None;
        built_in_rubric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rubric::RubricEdit;

    #[tokio::test]
    async fn fresh_store_loads_default_rubric() {
        let store = InMemoryRubricStore::new();
        let rubric = store.load().await.unwrap();
        assert_eq!(rubric, Rubric::default_rubric().unwrap());
    }

    #[tokio::test]
    async fn save_then_load_returns_saved_rubric() {
        let store = InMemoryRubricStore::new();
        let edited = store
            .load()
            .await
            .unwrap()
            .apply(RubricEdit::RemoveDomain { domain: 0 })
            .unwrap();

        store.save(&edited).await.unwrap();

        assert_eq!(store.load().await.unwrap(), edited);
    }

    #[tokio::test]
    async fn reset_restores_default() {
        let store = InMemoryRubricStore::with_rubric(Rubric::default());
        assert!(store.load().await.unwrap().is_empty());

        let restored = store.reset().await.unwrap();

        assert_eq!(restored.domain_count(), 7);
        assert_eq!(store.load().await.unwrap(), restored);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryRubricStore::new();
        let other = store.clone();
        store.save(&Rubric::default()).await.unwrap();
        assert!(other.load().await.unwrap().is_empty());
    }
}
