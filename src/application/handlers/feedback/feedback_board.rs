//! FeedbackBoardHandler - Posting to and reading the feedback board.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackMessage, FeedbackRole};
use crate::domain::foundation::DomainError;
use crate::ports::FeedbackRepository;

/// Command to post a message.
#[derive(Debug, Clone)]
pub struct PostFeedbackCommand {
    pub name: String,
    pub message: String,
    pub role: FeedbackRole,
}

/// Handler for the feedback board.
pub struct FeedbackBoardHandler {
    repository: Arc<dyn FeedbackRepository>,
}

impl FeedbackBoardHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    pub async fn post(&self, cmd: PostFeedbackCommand) -> Result<FeedbackMessage, DomainError> {
        let message = FeedbackMessage::new(&cmd.name, &cmd.message, cmd.role)?;
        self.repository.save(&message).await?;

        tracing::info!(
            feedback_id = %message.id(),
            role = %message.role(),
            "Feedback posted"
        );
        Ok(message)
    }

    /// All messages, oldest first.
    pub async fn list(&self) -> Result<Vec<FeedbackMessage>, DomainError> {
        let messages = self.repository.list().await?;
        tracing::debug!(count = messages.len(), "Listed feedback");
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFeedbackRepository;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> FeedbackBoardHandler {
        FeedbackBoardHandler::new(Arc::new(InMemoryFeedbackRepository::new()))
    }

    fn post(name: &str, message: &str, role: FeedbackRole) -> PostFeedbackCommand {
        PostFeedbackCommand {
            name: name.to_string(),
            message: message.to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn posted_messages_are_listed_in_order() {
        let handler = handler();
        handler
            .post(post("نورة", "سؤال عن الأوزان", FeedbackRole::User))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        handler
            .post(post("المشرف", "تم التحديث", FeedbackRole::Admin))
            .await
            .unwrap();

        let messages = handler.list().await.unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].name(), "نورة");
        assert_eq!(messages[1].role(), FeedbackRole::Admin);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_and_nothing_is_stored() {
        let handler = handler();

        let err = handler
            .post(post("  ", "رسالة", FeedbackRole::Guest))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(handler.list().await.unwrap().is_empty());
    }
}
