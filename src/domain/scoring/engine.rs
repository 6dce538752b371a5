//! Scoring engine - weighted domain scores and the overall result.
//!
//! Pure and stateless. Every call takes the rubric it scores against, so the
//! same engine scores live submissions and archived snapshots.
//!
//! Per question, a rung answer earns `rung - 1` points (0..=4) and the
//! question's weight maps to an integer multiplier (1..=4). A domain score is
//! `earned / possible * 25`, where `possible` sums `4 * multiplier` over every
//! question of the domain, answered or not.

use serde::{Deserialize, Serialize};

use super::answers::{AnswerValue, Answers};
use super::classification::{BandTable, MaturityTier};
use crate::domain::foundation::{DomainKey, Percentage};
use crate::domain::rubric::{Domain, Rubric};

/// Maximum score of a single domain.
pub const MAX_DOMAIN_SCORE: f64 = 25.0;

/// Points earned by the highest rung.
pub const MAX_POINTS: u32 = 4;

/// Weight thresholds, highest first, and the multiplier each one earns.
const MULTIPLIER_BANDS: [(f64, u32); 3] = [(1.8, 4), (1.5, 3), (1.2, 2)];

/// Score of one domain, rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub key: DomainKey,
    pub title: String,
    pub score: f64,
}

impl DomainScore {
    /// Tier of this domain on the 0..=25 band table.
    pub fn tier(&self) -> MaturityTier {
        BandTable::DOMAIN.classify(self.score)
    }
}

/// Full scoring result for one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricScore {
    /// One entry per rubric domain, in rubric order.
    pub per_domain: Vec<DomainScore>,
    /// Sum of the unrounded domain scores.
    pub raw_score: f64,
    /// `25 * domain count`.
    pub max_score: f64,
    pub percentage: Percentage,
    pub classification: MaturityTier,
}

impl RubricScore {
    /// Looks up a domain's score by key.
    pub fn domain(&self, key: &DomainKey) -> Option<&DomainScore> {
        self.per_domain.iter().find(|d| &d.key == key)
    }
}

/// Stateless scoring functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Maps a question weight to its integer multiplier.
    ///
    /// Non-finite or non-positive weights fall in the lowest band.
    pub fn multiplier(weight: f64) -> u32 {
        if !weight.is_finite() {
            return 1;
        }
        MULTIPLIER_BANDS
            .iter()
            .find(|(threshold, _)| weight >= *threshold)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(1)
    }

    /// Points earned by an answer. Unanswered and N/A both earn zero.
    pub fn points(answer: AnswerValue) -> u32 {
        match answer {
            AnswerValue::Unanswered | AnswerValue::NotApplicable => 0,
            AnswerValue::Rung(rung) => u32::from(rung.value()) - 1,
        }
    }

    /// Scores one domain. An empty domain scores zero.
    pub fn score_domain(domain: &Domain, answers: &Answers) -> DomainScore {
        DomainScore {
            key: domain.key.clone(),
            title: domain.title.clone(),
            score: round_one_decimal(Self::unrounded_domain_score(domain, answers)),
        }
    }

    /// Scores a whole rubric.
    pub fn score_rubric(rubric: &Rubric, answers: &Answers) -> RubricScore {
        let mut per_domain = Vec::with_capacity(rubric.domain_count());
        let mut raw_score = 0.0;

        for domain in rubric.domains() {
            raw_score += Self::unrounded_domain_score(domain, answers);
            per_domain.push(Self::score_domain(domain, answers));
        }

        let max_score = MAX_DOMAIN_SCORE * rubric.domain_count() as f64;
        let percentage = Percentage::from_ratio(raw_score, max_score);

        RubricScore {
            per_domain,
            raw_score,
            max_score,
            percentage,
            classification: BandTable::classify_percentage(percentage),
        }
    }

    fn unrounded_domain_score(domain: &Domain, answers: &Answers) -> f64 {
        let (earned, possible) = domain
            .questions
            .iter()
            .map(|q| {
                let multiplier = Self::multiplier(q.weight);
                let points = Self::points(answers.get(&domain.key, &q.id));
                (points * multiplier, MAX_POINTS * multiplier)
            })
            .fold((0u32, 0u32), |(e, p), (qe, qp)| (e + qe, p + qp));

        if possible == 0 {
            return 0.0;
        }
        f64::from(earned) / f64::from(possible) * MAX_DOMAIN_SCORE
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
