//! Storage Adapters
//!
//! Implementations of the `RubricStore`, `AssessmentRepository` and
//! `FeedbackRepository` ports.
//!
//! ## Available Adapters
//!
//! - **File\*** - YAML files on disk, one per record or message
//! - **InMemory\*** - in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAssessmentRepository, FileRubricStore};
//!
//! let rubrics = FileRubricStore::new("./data");
//! let history = FileAssessmentRepository::new("./data/assessments");
//! ```

mod file_assessment_repository;
mod file_feedback_repository;
mod file_rubric_store;
mod in_memory_assessment_repository;
mod in_memory_feedback_repository;
mod in_memory_rubric_store;

pub use file_assessment_repository::FileAssessmentRepository;
pub use file_feedback_repository::FileFeedbackRepository;
pub use file_rubric_store::FileRubricStore;
pub use in_memory_assessment_repository::InMemoryAssessmentRepository;
pub use in_memory_feedback_repository::InMemoryFeedbackRepository;
pub use in_memory_rubric_store::InMemoryRubricStore;
