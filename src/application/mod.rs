//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write (submit, edit, delete); query handlers only read.

pub mod handlers;

pub use handlers::{
    // Assessment handlers
    AssessmentHistoryHandler, ScoreAnswersHandler, ScoreAnswersQuery, ScoreAnswersResult,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
    // Feedback handlers
    FeedbackBoardHandler,
    PostFeedbackCommand,
    // Rubric handlers
    RubricAdminHandler,
};
