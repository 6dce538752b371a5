//! Assessment Repository Port - History of completed assessments.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::AssessmentId;

/// Port for storing completed assessment records.
///
/// Records are immutable once saved. The only mutations are the two deletes.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Store a new record.
    async fn save(&self, record: &AssessmentRecord) -> Result<(), StorageError>;

    /// Find a record by id. `Ok(None)` when absent.
    async fn find_by_id(&self, id: &AssessmentId)
        -> Result<Option<AssessmentRecord>, StorageError>;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<AssessmentRecord>, StorageError>;

    /// Delete one record.
    ///
    /// # Errors
    /// Returns `StorageError::NotFound` if no record has this id
    async fn delete(&self, id: &AssessmentId) -> Result<(), StorageError>;

    /// Delete every record and return how many were removed.
    async fn delete_all(&self) -> Result<usize, StorageError>;
}
