//! Feedback board handlers.

mod feedback_board;

pub use feedback_board::{FeedbackBoardHandler, PostFeedbackCommand};
