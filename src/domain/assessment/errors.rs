//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::scoring::IncompleteAssessment;

/// Errors raised while building or re-scoring an assessment record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("Assessment is incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("Invalid project info: {0}")]
    InvalidProjectInfo(ValidationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::Incomplete { .. } => ErrorCode::IncompleteAssessment,
            AssessmentError::InvalidProjectInfo(_) => ErrorCode::InvalidProjectInfo,
            AssessmentError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<IncompleteAssessment> for AssessmentError {
    fn from(err: IncompleteAssessment) -> Self {
        AssessmentError::Incomplete {
            answered: err.answered,
            total: err.total,
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Incomplete { answered, total } => DomainError::new(
                ErrorCode::IncompleteAssessment,
                format!("Answer every question before submitting ({answered}/{total})"),
            )
            .with_detail("answered", answered.to_string())
            .with_detail("total", total.to_string()),
            AssessmentError::InvalidProjectInfo(inner) => {
                DomainError::new(ErrorCode::InvalidProjectInfo, inner.to_string())
            }
            AssessmentError::Validation(inner) => inner.into(),
        }
    }
}
