//! ScoreAnswersHandler - Query handler for live scoring of an in-progress answer set.
//!
//! Nothing is stored. Incomplete answer sets are scored as they stand.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::DomainError;
use crate::domain::scoring::{
    Answers, Completion, CompletionTracker, ImprovementPlan, PositionalAnswers, RubricScore,
    ScoringEngine,
};
use crate::ports::RubricStore;

/// Query to score answers against the live rubric.
#[derive(Debug, Clone, Default)]
pub struct ScoreAnswersQuery {
    pub answers: PositionalAnswers,
}

/// Score, completion and plan for one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAnswersResult {
    pub score: RubricScore,
    pub completion: Completion,
    pub plan: ImprovementPlan,
}

/// Handler for scoring answers without saving them.
pub struct ScoreAnswersHandler {
    rubric_store: Arc<dyn RubricStore>,
}

impl ScoreAnswersHandler {
    pub fn new(rubric_store: Arc<dyn RubricStore>) -> Self {
        Self { rubric_store }
    }

    pub async fn handle(
        &self,
        query: ScoreAnswersQuery,
    ) -> Result<ScoreAnswersResult, DomainError> {
        let rubric = self.rubric_store.load().await?;
        let answers = Answers::from_positional(&rubric, &query.answers)?;

        let score = ScoringEngine::score_rubric(&rubric, &answers);
        let completion = CompletionTracker::completion(&rubric, &answers);

        tracing::debug!(
            answered = completion.answered,
            total = completion.total,
            percentage = score.percentage.value(),
            "Scored answer set"
        );

        Ok(ScoreAnswersResult {
            plan: ImprovementPlan::from_score(&score),
            score,
            completion,
        })
    }
}
