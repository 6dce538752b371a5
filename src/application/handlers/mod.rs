//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod feedback;
pub mod rubric;

pub use assessment::{
    AssessmentHistoryHandler, ScoreAnswersHandler, ScoreAnswersQuery, ScoreAnswersResult,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
pub use feedback::{FeedbackBoardHandler, PostFeedbackCommand};
pub use rubric::RubricAdminHandler;
