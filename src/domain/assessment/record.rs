//! Assessment record - the immutable result of one completed assessment.
//!
//! A record keeps the rubric it was answered against, so its scores can be
//! reproduced later even after the live rubric has been edited.

use serde::{Deserialize, Serialize};

use super::errors::AssessmentError;
use super::project_info::ProjectInfo;
use crate::domain::foundation::{AssessmentId, Percentage, Timestamp, ValidationError};
use crate::domain::rubric::Rubric;
use crate::domain::scoring::{
    Answers, BandTable, CompletionTracker, ImprovementPlan, MaturityTier, PositionalAnswers,
    RubricScore, ScoringEngine, MAX_DOMAIN_SCORE,
};

/// A completed assessment as stored in history.
///
/// # Invariants
///
/// - every question of `rubric` was answered when the record was built
/// - `score`, `max_score`, `percentage` and `classification` are what
///   [`ScoringEngine::score_rubric`] returns for `rubric` and `detailed_answers`
///
/// Loading a record checks the summary fields against each other and the
/// answers against the snapshot, so a tampered file fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredRecord")]
pub struct AssessmentRecord {
    id: AssessmentId,
    project_info: ProjectInfo,
    date: Timestamp,
    score: f64,
    max_score: f64,
    classification: MaturityTier,
    percentage: Percentage,
    detailed_answers: PositionalAnswers,
    rubric: Rubric,
}

impl AssessmentRecord {
    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn project_info(&self) -> &ProjectInfo {
        &self.project_info
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    /// Sum of the domain scores, between 0 and `max_score`.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    pub fn classification(&self) -> MaturityTier {
        self.classification
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// Answers in positional form, aligned with the stored rubric snapshot.
    pub fn detailed_answers(&self) -> &PositionalAnswers {
        &self.detailed_answers
    }

    /// The rubric the assessment was answered against.
    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Answers keyed by question id.
    pub fn answers(&self) -> Result<Answers, ValidationError> {
        Answers::from_positional(&self.rubric, &self.detailed_answers)
    }

    /// Re-scores against the stored snapshot. Reproduces the stored fields.
    pub fn rescore(&self) -> Result<RubricScore, AssessmentError> {
        let answers = self.answers()?;
        Ok(ScoringEngine::score_rubric(&self.rubric, &answers))
    }

    /// Scores the stored answers against a different rubric, usually the live one.
    ///
    /// Answers follow their question ids; questions added since count as
    /// unanswered and removed questions drop out.
    pub fn rescore_against(&self, live: &Rubric) -> Result<RubricScore, AssessmentError> {
        let answers = self.answers()?;
        Ok(ScoringEngine::score_rubric(live, &answers))
    }

    /// Improvement plan for the stored result.
    pub fn improvement_plan(&self) -> Result<ImprovementPlan, AssessmentError> {
        Ok(ImprovementPlan::from_score(&self.rescore()?))
    }
}

/// Wire shape of a record before its invariants are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: AssessmentId,
    project_info: ProjectInfo,
    date: Timestamp,
    score: f64,
    max_score: f64,
    classification: MaturityTier,
    percentage: Percentage,
    detailed_answers: PositionalAnswers,
    rubric: Rubric,
}

impl TryFrom<StoredRecord> for AssessmentRecord {
    type Error = ValidationError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        stored.rubric.validate()?;
        let answers = Answers::from_positional(&stored.rubric, &stored.detailed_answers)?;
        CompletionTracker::ensure_complete(&stored.rubric, &answers)
            .map_err(|e| ValidationError::invalid_format("detailedAnswers", e.to_string()))?;

        let expected_max = MAX_DOMAIN_SCORE * stored.rubric.domain_count() as f64;
        if stored.max_score != expected_max {
            return Err(ValidationError::invalid_format(
                "maxScore",
                format!("expected {expected_max} for the stored rubric, got {}", stored.max_score),
            ));
        }
        if !(0.0..=stored.max_score).contains(&stored.score) {
            return Err(ValidationError::invalid_format(
                "score",
                format!("{} is outside 0..={}", stored.score, stored.max_score),
            ));
        }
        if Percentage::from_ratio(stored.score, stored.max_score) != stored.percentage {
            return Err(ValidationError::invalid_format(
                "percentage",
                format!("{} does not match score {}", stored.percentage, stored.score),
            ));
        }
        if BandTable::classify_percentage(stored.percentage) != stored.classification {
            return Err(ValidationError::invalid_format(
                "classification",
                format!("{} does not match {}", stored.classification, stored.percentage),
            ));
        }

        Ok(AssessmentRecord {
            id: stored.id,
            project_info: stored.project_info,
            date: stored.date,
            score: stored.score,
            max_score: stored.max_score,
            classification: stored.classification,
            percentage: stored.percentage,
            detailed_answers: stored.detailed_answers,
            rubric: stored.rubric,
        })
    }
}

/// Builds records from completed answer sets. Pure apart from id and clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordBuilder;

impl RecordBuilder {
    /// Builds a record with a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// - `Incomplete` if any question of `rubric` is unanswered
    pub fn build(
        project_info: ProjectInfo,
        rubric: &Rubric,
        answers: &Answers,
    ) -> Result<AssessmentRecord, AssessmentError> {
        Self::build_at(AssessmentId::new(), Timestamp::now(), project_info, rubric, answers)
    }

    /// Builds a record with a caller-supplied id and date.
    pub fn build_at(
        id: AssessmentId,
        date: Timestamp,
        project_info: ProjectInfo,
        rubric: &Rubric,
        answers: &Answers,
    ) -> Result<AssessmentRecord, AssessmentError> {
        CompletionTracker::ensure_complete(rubric, answers)?;
        let result = ScoringEngine::score_rubric(rubric, answers);

        Ok(AssessmentRecord {
            id,
            project_info,
            date,
            score: result.raw_score,
            max_score: result.max_score,
            classification: result.classification,
            percentage: result.percentage,
            detailed_answers: answers.to_positional(rubric),
            rubric: rubric.clone(),
        })
    }
}
