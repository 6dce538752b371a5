//! Feedback board - short messages left by visitors, users and admins.

mod message;

pub use message::{FeedbackMessage, FeedbackRole};
