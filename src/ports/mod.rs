//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `RubricStore` - The live, admin-editable rubric
//! - `AssessmentRepository` - History of completed assessments
//! - `FeedbackRepository` - Messages posted to the feedback board

mod assessment_repository;
mod errors;
mod feedback_repository;
mod rubric_store;

pub use assessment_repository::AssessmentRepository;
pub use errors::StorageError;
pub use feedback_repository::FeedbackRepository;
pub use rubric_store::RubricStore;
