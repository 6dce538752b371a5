//! AssessmentHistoryHandler - Queries and deletions over stored assessments.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentRecord, HistoryOverview};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::domain::scoring::{ImprovementPlan, RubricScore};
use crate::ports::{AssessmentRepository, RubricStore};

/// Handler for browsing and pruning assessment history.
pub struct AssessmentHistoryHandler {
    repository: Arc<dyn AssessmentRepository>,
    rubric_store: Arc<dyn RubricStore>,
}

impl AssessmentHistoryHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        rubric_store: Arc<dyn RubricStore>,
    ) -> Self {
        Self {
            repository,
            rubric_store,
        }
    }

    /// All records, newest first.
    pub async fn list(&self) -> Result<Vec<AssessmentRecord>, DomainError> {
        let records = self.repository.list().await?;
        tracing::debug!(count = records.len(), "Listed assessment history");
        Ok(records)
    }

    pub async fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn overview(&self) -> Result<HistoryOverview, DomainError> {
        let records = self.repository.list().await?;
        Ok(HistoryOverview::from_records(&records))
    }

    /// Re-scores a stored record against the rubric it was answered with.
    pub async fn rescore(&self, id: &AssessmentId) -> Result<RubricScore, DomainError> {
        let record = self.get(id).await?;
        Ok(record.rescore()?)
    }

    /// Improvement plan for a stored record, computed from its snapshot.
    pub async fn plan(&self, id: &AssessmentId) -> Result<ImprovementPlan, DomainError> {
        let record = self.get(id).await?;
        Ok(record.improvement_plan()?)
    }

    /// Scores a stored record's answers against the current live rubric.
    pub async fn rescore_against_live(
        &self,
        id: &AssessmentId,
    ) -> Result<RubricScore, DomainError> {
        let record = self.get(id).await?;
        let live = self.rubric_store.load().await?;
        Ok(record.rescore_against(&live)?)
    }

    pub async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        tracing::info!(assessment_id = %id, "Deleted assessment");
        Ok(())
    }

    /// Deletes every record and returns how many were removed.
    pub async fn delete_all(&self) -> Result<usize, DomainError> {
        let removed = self.repository.delete_all().await?;
        tracing::info!(removed, "Cleared assessment history");
        Ok(removed)
    }
}

fn not_found(id: &AssessmentId) -> DomainError {
    DomainError::new(
        ErrorCode::AssessmentNotFound,
        format!("Assessment not found: {id}"),
    )
    .with_detail("assessment_id", id.to_string())
}
