//! Domain layer containing the rubric model and the scoring rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, percentage, timestamp, errors)
//! - `rubric` - Domains, questions, weights and the admin edit operations
//! - `scoring` - Pure scoring, classification and completion functions
//! - `assessment` - Completed assessment records and history figures
//! - `feedback` - Messages posted to the feedback board

pub mod assessment;
pub mod feedback;
pub mod foundation;
pub mod rubric;
pub mod scoring;
