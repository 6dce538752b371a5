//! Rubric Module - The editable configuration of domains, questions and weights.
//!
//! The rubric is plain data. Scoring takes it as an argument on every call,
//! so archived assessments can be scored against the snapshot they were
//! answered with.

mod defaults;
mod domain;
mod editor;
mod model;
mod question;

pub use domain::Domain;
pub use editor::{placeholder_question, RubricEdit, NEW_DOMAIN_TITLE, NEW_QUESTION_TEXT};
pub use model::Rubric;
pub use question::{coerce_weight, Question, DEFAULT_WEIGHT, LEVEL_COUNT, MAX_WEIGHT, MIN_WEIGHT};
