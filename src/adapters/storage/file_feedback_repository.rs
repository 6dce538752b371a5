//! File-based Feedback Repository Adapter
//!
//! Stores each message as `<id>.yaml` under a base directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::in_memory_feedback_repository::oldest_first;
use crate::domain::feedback::FeedbackMessage;
use crate::ports::{FeedbackRepository, StorageError};

const MESSAGE_EXTENSION: &str = "yaml";

/// File-based feedback board
#[derive(Debug, Clone)]
pub struct FileFeedbackRepository {
    base_path: PathBuf,
}

impl FileFeedbackRepository {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FeedbackRepository for FileFeedbackRepository {
    async fn save(&self, message: &FeedbackMessage) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await?;

        let yaml = serde_yaml::to_string(message)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        let path = self
            .base_path
            .join(format!("{}.{MESSAGE_EXTENSION}", message.id()));
        fs::write(path, yaml).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<FeedbackMessage>, StorageError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut messages = Vec::new();
        let mut entries = fs::read_dir(&self.base_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(MESSAGE_EXTENSION) {
                continue;
            }
            let yaml = fs::read_to_string(&path).await?;
            let message = serde_yaml::from_str(&yaml)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
            messages.push(message);
        }
        oldest_first(&mut messages);
        Ok(messages)
    }
}
