//! File-based Assessment Repository Adapter
//!
//! Stores each assessment record as `<id>.yaml` under a base directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::in_memory_assessment_repository::newest_first;
use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentRepository, StorageError};

const RECORD_EXTENSION: &str = "yaml";

/// File-based storage for assessment records
#[derive(Debug, Clone)]
pub struct FileAssessmentRepository {
    base_path: PathBuf,
}

impl FileAssessmentRepository {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self, id: &AssessmentId) -> PathBuf {
        self.base_path.join(format!("{id}.{RECORD_EXTENSION}"))
    }

    /// Paths of every stored record file
    async fn record_paths(&self) -> Result<Vec<PathBuf>, StorageError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let mut entries = fs::read_dir(&self.base_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION) {
                paths.push(path);
            }
        }
        Ok(paths)
    }

    async fn read_record(path: &Path) -> Result<AssessmentRecord, StorageError> {
        let yaml = fs::read_to_string(path).await?;
        serde_yaml::from_str(&yaml).map_err(|e| StorageError::DeserializationFailed(e.to_string()))
    }
}

#[async_trait]
impl AssessmentRepository for FileAssessmentRepository {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await?;

        let yaml = serde_yaml::to_string(record)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        fs::write(self.record_path(record.id()), yaml).await?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &AssessmentId,
    ) -> Result<Option<AssessmentRecord>, StorageError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_record(&path).await.map(Some)
    }

    async fn list(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        let mut records = Vec::new();
        for path in self.record_paths().await? {
            records.push(Self::read_record(&path).await?);
        }
        newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), StorageError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StorageError::NotFound(*id));
        }
        fs::remove_file(&path).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<usize, StorageError> {
        let paths = self.record_paths().await?;
        for path in &paths {
            fs::remove_file(path).await?;
        }
        Ok(paths.len())
    }
}
