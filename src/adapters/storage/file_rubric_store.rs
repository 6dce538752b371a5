//! File-based Rubric Store Adapter
//!
//! Keeps the live rubric as a single YAML file. A missing file means the
//! rubric was never edited, so the built-in rubric is served.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::in_memory_rubric_store::built_in_rubric;
use crate::domain::rubric::Rubric;
use crate::ports::{RubricStore, StorageError};

const RUBRIC_FILE: &str = "rubric.yaml";

/// File-based rubric store
#[derive(Debug, Clone)]
pub struct FileRubricStore {
    base_path: PathBuf,
}

impl FileRubricStore {
    /// Create a store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRubricStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn rubric_path(&self) -> PathBuf {
        self.base_path.join(RUBRIC_FILE)
    }
}

#[async_trait]
impl RubricStore for FileRubricStore {
    async fn load(&self) -> Result<Rubric, StorageError> {
        let path = self.rubric_path();
        if !path.exists() {
            return built_in_rubric();
        }

        let yaml = fs::read_to_string(&path).await?;
        let rubric: Rubric = serde_yaml::from_str(&yaml)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
        rubric
            .validate()
            .map_err(|e| StorageError::InvalidRubric(e.to_string()))?;

        Ok(rubric)
    }

    async fn save(&self, rubric: &Rubric) -> Result<(), StorageError> {
        rubric
            .validate()
            .map_err(|e| StorageError::InvalidRubric(e.to_string()))?;

        let yaml = serde_yaml::to_string(rubric)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        fs::create_dir_all(&self.base_path).await?;
        fs::write(self.rubric_path(), yaml).await?;
        Ok(())
    }

    async fn reset(&self) -> Result<Rubric, StorageError> {
        let path = self.rubric_path();
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        built_in_rubric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rubric::RubricEdit;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = FileRubricStore::new(dir.path());
        assert_eq!(store.load().await.unwrap(), Rubric::default_rubric().unwrap());
    }

    #[tokio::test]
    async fn saved_rubric_survives_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let edited = Rubric::default_rubric()
            .unwrap()
            .apply(RubricEdit::RenameDomain {
                domain: 1,
                title: "البنية والتكامل".to_string(),
            })
            .unwrap();

        FileRubricStore::new(dir.path()).save(&edited).await.unwrap();
        let loaded = FileRubricStore::new(dir.path()).load().await.unwrap();

        assert_eq!(loaded, edited);
    }

    #[tokio::test]
    async fn save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileRubricStore::new(&nested);

        store.save(&Rubric::default()).await.unwrap();

        assert!(nested.join(RUBRIC_FILE).exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_deserialization_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(RUBRIC_FILE), "key: [unclosed").unwrap();

        let result = FileRubricStore::new(dir.path()).load().await;

        assert!(matches!(result, Err(StorageError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn file_breaking_invariants_is_rejected() {
        let dir = TempDir::new().unwrap();
        let yaml = "- key: a\n  title: A\n- key: a\n  title: B\n";
        std::fs::write(dir.path().join(RUBRIC_FILE), yaml).unwrap();

        let result = FileRubricStore::new(dir.path()).load().await;

        assert!(matches!(result, Err(StorageError::InvalidRubric(_))));
    }

    #[tokio::test]
    async fn reset_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = FileRubricStore::new(dir.path());
        store.save(&Rubric::default()).await.unwrap();

        let restored = store.reset().await.unwrap();

        assert!(!dir.path().join(RUBRIC_FILE).exists());
        assert_eq!(restored.domain_count(), 7);
    }
}
