//! Aggregate figures over the assessment history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::record::AssessmentRecord;
use crate::domain::foundation::{AssessmentId, Percentage};
use crate::domain::scoring::MaturityTier;

/// Summary of a set of stored records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOverview {
    pub total: usize,
    /// Mean of the record percentages, rounded. `None` for an empty history.
    pub average_percentage: Option<Percentage>,
    pub best_percentage: Option<Percentage>,
    /// Record count per tier; every tier is present, zeros included.
    pub tier_counts: BTreeMap<MaturityTier, usize>,
    pub latest: Option<AssessmentId>,
}

impl HistoryOverview {
    pub fn from_records(records: &[AssessmentRecord]) -> Self {
        let mut tier_counts: BTreeMap<MaturityTier, usize> =
            MaturityTier::ALL.into_iter().map(|t| (t, 0)).collect();
        for record in records {
            *tier_counts.entry(record.classification()).or_default() += 1;
        }

        let sum: u32 = records
            .iter()
            .map(|r| u32::from(r.percentage().value()))
            .sum();
        let average_percentage = (!records.is_empty())
            .then(|| Percentage::from_ratio(f64::from(sum), records.len() as f64 * 100.0));

        Self {
            total: records.len(),
            average_percentage,
            best_percentage: records.iter().map(|r| r.percentage()).max(),
            tier_counts,
            latest: records
                .iter()
                .max_by_key(|r| *r.date())
                .map(|r| *r.id()),
        }
    }
}
