//! Errors shared by the storage ports.

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};

/// Errors that can occur in rubric or assessment storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Failed to serialize: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize: {0}")]
    DeserializationFailed(String),

    #[error("Stored rubric is invalid: {0}")]
    InvalidRubric(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl StorageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StorageError::NotFound(_) => ErrorCode::AssessmentNotFound,
            _ => ErrorCode::StorageError,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::IoError(err.to_string())
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
