//! SubmitAssessmentHandler - Command handler for finalizing an assessment.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, AssessmentRecord, ProjectInfo, RecordBuilder};
use crate::domain::foundation::DomainError;
use crate::domain::scoring::{Answers, ImprovementPlan, PositionalAnswers};
use crate::ports::{AssessmentRepository, RubricStore};

/// Command to submit a completed answer set.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub project_info: ProjectInfo,
    /// Answers aligned with the live rubric's current question order.
    pub answers: PositionalAnswers,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub record: AssessmentRecord,
    pub plan: ImprovementPlan,
}

/// Handler for submitting assessments.
pub struct SubmitAssessmentHandler {
    rubric_store: Arc<dyn RubricStore>,
    repository: Arc<dyn AssessmentRepository>,
}

impl SubmitAssessmentHandler {
    pub fn new(
        rubric_store: Arc<dyn RubricStore>,
        repository: Arc<dyn AssessmentRepository>,
    ) -> Self {
        Self {
            rubric_store,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        // 1. Project info must be complete before anything is scored
        cmd.project_info
            .validate()
            .map_err(AssessmentError::InvalidProjectInfo)?;

        // 2. Resolve answers against the live rubric
        let rubric = self.rubric_store.load().await?;
        let answers = Answers::from_positional(&rubric, &cmd.answers)?;

        // 3. Build the immutable record; rejects incomplete answer sets
        let record = match RecordBuilder::build(cmd.project_info, &rubric, &answers) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected assessment submission");
                return Err(err.into());
            }
        };

        // 4. Persist
        self.repository.save(&record).await?;

        tracing::info!(
            assessment_id = %record.id(),
            project = %record.project_info().project_name,
            percentage = record.percentage().value(),
            classification = record.classification().name(),
            "Assessment submitted"
        );

        let plan = record.improvement_plan()?;
        Ok(SubmitAssessmentResult { record, plan })
    }
}
