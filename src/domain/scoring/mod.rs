//! Scoring Module - Pure functions from (rubric, answers) to scores and tiers.

mod answers;
mod classification;
mod completion;
mod engine;
mod plan;

pub use answers::{AnswerValue, Answers, MaturityRung, PositionalAnswers};
pub use classification::{classify, BandTable, MaturityTier};
pub use completion::{Completion, CompletionTracker, DomainCompletion, IncompleteAssessment};
pub use engine::{DomainScore, RubricScore, ScoringEngine, MAX_DOMAIN_SCORE, MAX_POINTS};
pub use plan::{ImprovementPlan, PlanGroup, PlanItem};
