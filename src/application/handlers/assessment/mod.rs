//! Assessment command and query handlers.

mod assessment_history;
mod score_answers;
mod submit_assessment;

pub use assessment_history::AssessmentHistoryHandler;
pub use score_answers::{ScoreAnswersHandler, ScoreAnswersQuery, ScoreAnswersResult};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
