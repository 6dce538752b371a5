//! Completion tracking.
//!
//! A question counts as answered once it holds any final response, including
//! N/A. A submission requires every question answered.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::answers::Answers;
use crate::domain::foundation::{DomainKey, Percentage};
use crate::domain::rubric::{Domain, Rubric};

/// Progress through one domain.
///
/// `percentage` is the unrounded share of answered questions (0.0 to 100.0)
/// that drives the per-domain progress bar. A domain without questions
/// reports 0.0 and is never complete, the same rule [`Completion`] applies
/// to the whole rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCompletion {
    pub key: DomainKey,
    pub answered: usize,
    pub total: usize,
    pub percentage: f64,
}

impl DomainCompletion {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

/// Progress through a whole rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
    pub percentage: Percentage,
    pub per_domain: Vec<DomainCompletion>,
}

impl Completion {
    /// True only when every question is answered and there is at least one.
    ///
    /// Counts are compared directly; a rounded percentage of 100 can still
    /// hide an unanswered question in a large rubric.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.answered
    }
}

/// Raised when an incomplete answer set is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Assessment is incomplete: {answered} of {total} questions answered")]
pub struct IncompleteAssessment {
    pub answered: usize,
    pub total: usize,
}

/// Computes completion of an answer set against a rubric.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionTracker;

impl CompletionTracker {
    pub fn domain(domain: &Domain, answers: &Answers) -> DomainCompletion {
        let total = domain.questions.len();
        let answered = answers.for_domain(domain).filter(|a| a.is_answered()).count();
        let percentage = if total == 0 {
            0.0
        } else {
            answered as f64 / total as f64 * 100.0
        };
        DomainCompletion {
            key: domain.key.clone(),
            answered,
            total,
            percentage,
        }
    }

    pub fn completion(rubric: &Rubric, answers: &Answers) -> Completion {
        let per_domain: Vec<DomainCompletion> = rubric
            .domains()
            .iter()
            .map(|d| Self::domain(d, answers))
            .collect();
        let answered = per_domain.iter().map(|d| d.answered).sum();
        let total = per_domain.iter().map(|d| d.total).sum();

        Completion {
            answered,
            total,
            percentage: Percentage::from_ratio(answered as f64, total as f64),
            per_domain,
        }
    }

    /// Returns the completion, or an error unless every question is answered.
    pub fn ensure_complete(
        rubric: &Rubric,
        answers: &Answers,
    ) -> Result<Completion, IncompleteAssessment> {
        let completion = Self::completion(rubric, answers);
        if !completion.is_complete() {
            return Err(IncompleteAssessment {
                answered: completion.answered,
                total: completion.total,
            });
        }
        Ok(completion)
    }
}
