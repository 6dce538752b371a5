//! Assessment Module - Completed assessments and their history.
//!
//! An assessment starts as a blank answer set, is filled in one answer at a
//! time, and becomes an [`AssessmentRecord`] once every question has an answer.
//! Records are immutable; the only later change is deletion.

mod errors;
mod overview;
mod project_info;
mod record;

pub use errors::AssessmentError;
pub use overview::HistoryOverview;
pub use project_info::ProjectInfo;
pub use record::{AssessmentRecord, RecordBuilder};
