//! RubricAdminHandler - Admin edits, reset and export of the live rubric.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::rubric::{Rubric, RubricEdit};
use crate::ports::RubricStore;

/// Handler for rubric administration.
pub struct RubricAdminHandler {
    store: Arc<dyn RubricStore>,
}

impl RubricAdminHandler {
    pub fn new(store: Arc<dyn RubricStore>) -> Self {
        Self { store }
    }

    /// The live rubric.
    pub async fn current(&self) -> Result<Rubric, DomainError> {
        Ok(self.store.load().await?)
    }

    /// Applies one edit and persists the result.
    ///
    /// A rejected edit leaves the stored rubric untouched.
    pub async fn apply(&self, edit: RubricEdit) -> Result<Rubric, DomainError> {
        self.apply_all(vec![edit]).await
    }

    /// Applies a batch of edits in order and persists once.
    ///
    /// All or nothing: if any edit fails, nothing is saved.
    pub async fn apply_all(&self, edits: Vec<RubricEdit>) -> Result<Rubric, DomainError> {
        let mut rubric = self.store.load().await?;
        let count = edits.len();

        for edit in edits {
            let name = edit.name();
            rubric = rubric.apply(edit).map_err(|err| {
                tracing::warn!(edit = name, error = %err, "Rejected rubric edit");
                DomainError::from(err).with_detail("edit", name)
            })?;
        }

        self.store.save(&rubric).await?;
        tracing::info!(
            edits = count,
            domains = rubric.domain_count(),
            questions = rubric.question_count(),
            "Rubric updated"
        );
        Ok(rubric)
    }

    /// Restores the built-in rubric.
    pub async fn reset(&self) -> Result<Rubric, DomainError> {
        let rubric = self.store.reset().await?;
        tracing::info!(domains = rubric.domain_count(), "Rubric reset to defaults");
        Ok(rubric)
    }

    /// The live rubric as pretty-printed JSON.
    pub async fn export_json(&self) -> Result<String, DomainError> {
        let rubric = self.store.load().await?;
        rubric.to_json_pretty().map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to export rubric: {e}"))
        })
    }

    /// Replaces the live rubric with one imported from JSON.
    pub async fn import_json(&self, json: &str) -> Result<Rubric, DomainError> {
        let rubric: Rubric = serde_json::from_str(json).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid rubric JSON: {e}"))
        })?;
        rubric.validate()?;
        self.store.save(&rubric).await?;
        tracing::info!(domains = rubric.domain_count(), "Rubric imported");
        Ok(rubric)
    }
}
