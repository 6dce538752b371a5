//! Rubric Store Port - Where the live rubric is kept between runs.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::rubric::Rubric;

/// Port for loading and persisting the live rubric.
///
/// A store that has never been written to returns the built-in rubric.
#[async_trait]
pub trait RubricStore: Send + Sync {
    /// Load the current rubric.
    ///
    /// # Errors
    /// Returns `StorageError::InvalidRubric` if the stored rubric breaks an invariant
    async fn load(&self) -> Result<Rubric, StorageError>;

    /// Replace the stored rubric.
    async fn save(&self, rubric: &Rubric) -> Result<(), StorageError>;

    /// Restore the built-in rubric and return it.
    async fn reset(&self) -> Result<Rubric, StorageError>;
}
