//! In-Memory Assessment Repository Adapter
//!
//! Stores assessment records in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentRepository, StorageError};

/// In-memory storage for assessment records
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    records: Arc<RwLock<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

/// Orders records newest first; ties keep a stable order by id.
pub(super) fn newest_first(records: &mut [AssessmentRecord]) {
    records.sort_by(|a, b| {
        b.date()
            .cmp(a.date())
            .then_with(|| a.id().to_string().cmp(&b.id().to_string()))
    });
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.insert(*record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &AssessmentId,
    ) -> Result<Option<AssessmentRecord>, StorageError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        let mut records: Vec<AssessmentRecord> =
            self.records.read().await.values().cloned().collect();
        newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), StorageError> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(*id))
    }

    async fn delete_all(&self) -> Result<usize, StorageError> {
        let mut records = self.records.write().await;
        let removed = records.len();
        records.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::test_support::record_dated;

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repo = InMemoryAssessmentRepository::new();
        let record = record_dated(0);

        repo.save(&record).await.unwrap();

        assert_eq!(repo.find_by_id(record.id()).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryAssessmentRepository::new();
        assert!(repo.find_by_id(&AssessmentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryAssessmentRepository::new();
        let old = record_dated(5);
        let new = record_dated(1);
        let middle = record_dated(3);
        for r in [&old, &new, &middle] {
            repo.save(r).await.unwrap();
        }

        let ids: Vec<AssessmentId> = repo.list().await.unwrap().iter().map(|r| *r.id()).collect();

        assert_eq!(ids, vec![*new.id(), *middle.id(), *old.id()]);
    }

    #[tokio::test]
    async fn delete_removes_one_record() {
        let repo = InMemoryAssessmentRepository::new();
        let keep = record_dated(1);
        let drop = record_dated(2);
        repo.save(&keep).await.unwrap();
        repo.save(&drop).await.unwrap();

        repo.delete(drop.id()).await.unwrap();

        assert_eq!(repo.count().await, 1);
        assert!(repo.find_by_id(keep.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryAssessmentRepository::new();
        let result = repo.delete(&AssessmentId::new()).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_all_reports_count() {
        let repo = InMemoryAssessmentRepository::new();
        repo.save(&record_dated(1)).await.unwrap();
        repo.save(&record_dated(2)).await.unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_saves_are_all_kept() {
        let repo = InMemoryAssessmentRepository::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.save(&record_dated(i)).await.unwrap() })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(repo.count().await, 8);
    }
}
