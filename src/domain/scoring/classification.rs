//! Maturity tiers and the band table that maps scores onto them.
//!
//! Overall percentages and per-domain scores share one table of five equal
//! bands with inclusive upper bounds at 20%, 40%, 60% and 80% of the
//! maximum. Only the maximum differs (100 for percentages, 25 for domains).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::MAX_DOMAIN_SCORE;
use crate::domain::foundation::Percentage;

/// Five ordered maturity tiers, weakest first.
///
/// Serialized as the Arabic label shown to users and stored in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityTier {
    #[serde(rename = "ضعيف")]
    Weak,
    #[serde(rename = "تأسيسي")]
    Foundational,
    #[serde(rename = "مستقر")]
    Stable,
    #[serde(rename = "متقدم")]
    Advanced,
    #[serde(rename = "رائد")]
    Pioneer,
}

impl MaturityTier {
    pub const ALL: [MaturityTier; 5] = [
        MaturityTier::Weak,
        MaturityTier::Foundational,
        MaturityTier::Stable,
        MaturityTier::Advanced,
        MaturityTier::Pioneer,
    ];

    /// Arabic display label.
    pub fn label(&self) -> &'static str {
        match self {
            MaturityTier::Weak => "ضعيف",
            MaturityTier::Foundational => "تأسيسي",
            MaturityTier::Stable => "مستقر",
            MaturityTier::Advanced => "متقدم",
            MaturityTier::Pioneer => "رائد",
        }
    }

    /// Stable ASCII name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            MaturityTier::Weak => "weak",
            MaturityTier::Foundational => "foundational",
            MaturityTier::Stable => "stable",
            MaturityTier::Advanced => "advanced",
            MaturityTier::Pioneer => "pioneer",
        }
    }
}

impl fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Five equal bands over `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandTable {
    max: f64,
}

impl BandTable {
    /// Table for overall percentages.
    pub const PERCENTAGE: BandTable = BandTable { max: 100.0 };

    /// Table for per-domain scores.
    pub const DOMAIN: BandTable = BandTable {
        max: MAX_DOMAIN_SCORE,
    };

    pub const fn new(max: f64) -> Self {
        Self { max }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive upper bounds of the first four tiers.
    pub fn upper_bounds(&self) -> [f64; 4] {
        [1.0, 2.0, 3.0, 4.0].map(|k| self.max * k / 5.0)
    }

    /// Maps a value to its tier. Values on a boundary fall in the lower tier.
    pub fn classify(&self, value: f64) -> MaturityTier {
        if value.is_nan() {
            return MaturityTier::Weak;
        }
        // Compare value * 5 against max * k so integer boundaries stay exact.
        let scaled = value * 5.0;
        for (k, tier) in MaturityTier::ALL[..4].iter().enumerate() {
            if scaled <= self.max * (k as f64 + 1.0) {
                return *tier;
            }
        }
        MaturityTier::Pioneer
    }

    /// Classifies an overall percentage.
    pub fn classify_percentage(percentage: Percentage) -> MaturityTier {
        Self::PERCENTAGE.classify(f64::from(percentage.value()))
    }
}

/// Free-function form of [`BandTable::classify`].
pub fn classify(value: f64, table: &BandTable) -> MaturityTier {
    table.classify(value)
}
