//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Rubric, assessment and feedback persistence (in-memory, YAML files)

pub mod storage;

pub use storage::{
    FileAssessmentRepository, FileFeedbackRepository, FileRubricStore,
    InMemoryAssessmentRepository, InMemoryFeedbackRepository, InMemoryRubricStore,
};
