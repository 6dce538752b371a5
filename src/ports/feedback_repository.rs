//! Feedback Repository Port - Messages on the feedback board.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::feedback::FeedbackMessage;

/// Port for the append-only feedback board.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Store a new message.
    async fn save(&self, message: &FeedbackMessage) -> Result<(), StorageError>;

    /// All messages, oldest first, the order the board reads in.
    async fn list(&self) -> Result<Vec<FeedbackMessage>, StorageError>;
}
