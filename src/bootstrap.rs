//! Wiring of storage adapters into application handlers.

use std::sync::Arc;

use crate::adapters::storage::{
    FileAssessmentRepository, FileFeedbackRepository, FileRubricStore,
    InMemoryAssessmentRepository, InMemoryFeedbackRepository, InMemoryRubricStore,
};
use crate::application::{
    AssessmentHistoryHandler, FeedbackBoardHandler, RubricAdminHandler, ScoreAnswersHandler,
    SubmitAssessmentHandler,
};
use crate::config::{StorageBackend, StorageConfig};
use crate::ports::{AssessmentRepository, FeedbackRepository, RubricStore};

/// Shared ports, built once per process.
#[derive(Clone)]
pub struct Services {
    pub rubric_store: Arc<dyn RubricStore>,
    pub repository: Arc<dyn AssessmentRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}

impl Services {
    pub fn from_config(config: &StorageConfig) -> Self {
        match config.backend {
            StorageBackend::Memory => Self::in_memory(),
            StorageBackend::File => {
                tracing::debug!(data_dir = %config.data_dir.display(), "Using file storage");
                Self {
                    rubric_store: Arc::new(FileRubricStore::new(&config.data_dir)),
                    repository: Arc::new(FileAssessmentRepository::new(config.assessments_dir())),
                    feedback: Arc::new(FileFeedbackRepository::new(config.feedback_dir())),
                }
            }
        }
    }

    pub fn in_memory() -> Self {
        Self {
            rubric_store: Arc::new(InMemoryRubricStore::new()),
            repository: Arc::new(InMemoryAssessmentRepository::new()),
            feedback: Arc::new(InMemoryFeedbackRepository::new()),
        }
    }

    pub fn score_handler(&self) -> ScoreAnswersHandler {
        ScoreAnswersHandler::new(self.rubric_store.clone())
    }

    pub fn submit_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.rubric_store.clone(), self.repository.clone())
    }

    pub fn history_handler(&self) -> AssessmentHistoryHandler {
        AssessmentHistoryHandler::new(self.repository.clone(), self.rubric_store.clone())
    }

    pub fn rubric_admin_handler(&self) -> RubricAdminHandler {
        RubricAdminHandler::new(self.rubric_store.clone())
    }

    pub fn feedback_handler(&self) -> FeedbackBoardHandler {
        FeedbackBoardHandler::new(self.feedback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PostFeedbackCommand;
    use crate::domain::feedback::FeedbackRole;
    use tempfile::TempDir;

    #[tokio::test]
    async fn file_backend_persists_across_service_instances() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: dir.path().to_path_buf(),
        };

        let first = Services::from_config(&config);
        first
            .rubric_admin_handler()
            .apply(crate::domain::rubric::RubricEdit::RemoveDomain { domain: 0 })
            .await
            .unwrap();

        let second = Services::from_config(&config);
        let rubric = second.rubric_admin_handler().current().await.unwrap();
        assert_eq!(rubric.domain_count(), 6);
    }

    #[tokio::test]
    async fn file_backend_keeps_feedback_under_data_dir() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: dir.path().to_path_buf(),
        };

        Services::from_config(&config)
            .feedback_handler()
            .post(PostFeedbackCommand {
                name: "خالد".to_string(),
                message: "اقتراح: إضافة مجال للخصوصية".to_string(),
                role: FeedbackRole::User,
            })
            .await
            .unwrap();

        let messages = Services::from_config(&config)
            .feedback_handler()
            .list()
            .await
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name(), "خالد");
        assert!(config.feedback_dir().is_dir());
    }

    #[tokio::test]
    async fn memory_backend_starts_from_defaults() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        let services = Services::from_config(&config);
        let rubric = services.rubric_store.load().await.unwrap();
        assert_eq!(rubric.domain_count(), 7);
    }
}
