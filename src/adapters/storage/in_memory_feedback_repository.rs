//! In-Memory Feedback Repository Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feedback::FeedbackMessage;
use crate::ports::{FeedbackRepository, StorageError};

/// In-memory feedback board
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackRepository {
    messages: Arc<RwLock<Vec<FeedbackMessage>>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Orders messages oldest first; ties keep a stable order by id.
pub(super) fn oldest_first(messages: &mut [FeedbackMessage]) {
    messages.sort_by(|a, b| {
        a.timestamp()
            .cmp(b.timestamp())
            .then_with(|| a.id().to_string().cmp(&b.id().to_string()))
    });
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn save(&self, message: &FeedbackMessage) -> Result<(), StorageError> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<FeedbackMessage>, StorageError> {
        let mut messages = self.messages.read().await.clone();
        oldest_first(&mut messages);
        Ok(messages)
    }
}
