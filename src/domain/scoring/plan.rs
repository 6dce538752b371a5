//! Improvement plan: domains grouped by how urgently they need work.

use serde::{Deserialize, Serialize};

use super::classification::MaturityTier;
use super::engine::RubricScore;
use crate::domain::foundation::DomainKey;

/// Plan bucket a domain lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanGroup {
    Urgent,
    Priority,
    Strength,
}

impl PlanGroup {
    /// Groups in the order they are presented, most urgent first.
    pub const ALL: [PlanGroup; 3] = [PlanGroup::Urgent, PlanGroup::Priority, PlanGroup::Strength];

    pub fn for_tier(tier: MaturityTier) -> Self {
        match tier {
            MaturityTier::Weak | MaturityTier::Foundational => PlanGroup::Urgent,
            MaturityTier::Stable | MaturityTier::Advanced => PlanGroup::Priority,
            MaturityTier::Pioneer => PlanGroup::Strength,
        }
    }

    /// Arabic heading shown above the group.
    pub fn label(&self) -> &'static str {
        match self {
            PlanGroup::Urgent => "تدخل عاجل",
            PlanGroup::Priority => "أولوية تطوير",
            PlanGroup::Strength => "نقاط قوة",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub key: DomainKey,
    pub title: String,
    pub score: f64,
    pub tier: MaturityTier,
}

/// Domains grouped into urgent, priority and strength buckets, rubric order kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementPlan {
    pub urgent: Vec<PlanItem>,
    pub priority: Vec<PlanItem>,
    pub strengths: Vec<PlanItem>,
}

impl ImprovementPlan {
    pub fn from_score(score: &RubricScore) -> Self {
        let mut plan = Self::default();
        for domain in &score.per_domain {
            let tier = domain.tier();
            let item = PlanItem {
                key: domain.key.clone(),
                title: domain.title.clone(),
                score: domain.score,
                tier,
            };
            match PlanGroup::for_tier(tier) {
                PlanGroup::Urgent => plan.urgent.push(item),
                PlanGroup::Priority => plan.priority.push(item),
                PlanGroup::Strength => plan.strengths.push(item),
            }
        }
        plan
    }

    pub fn group(&self, group: PlanGroup) -> &[PlanItem] {
        match group {
            PlanGroup::Urgent => &self.urgent,
            PlanGroup::Priority => &self.priority,
            PlanGroup::Strength => &self.strengths,
        }
    }

    pub fn len(&self) -> usize {
        self.urgent.len() + self.priority.len() + self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use crate::domain::scoring::DomainScore;

    fn score_with(domains: &[(&str, f64)]) -> RubricScore {
        RubricScore {
            per_domain: domains
                .iter()
                .map(|(k, s)| DomainScore {
                    key: DomainKey::new(*k).unwrap(),
                    title: k.to_string(),
                    score: *s,
                })
                .collect(),
            raw_score: domains.iter().map(|(_, s)| s).sum(),
            max_score: 25.0 * domains.len() as f64,
            percentage: Percentage::ZERO,
            classification: MaturityTier::Weak,
        }
    }

    #[test]
    fn tiers_map_to_groups() {
        assert_eq!(PlanGroup::for_tier(MaturityTier::Weak), PlanGroup::Urgent);
        assert_eq!(PlanGroup::for_tier(MaturityTier::Foundational), PlanGroup::Urgent);
        assert_eq!(PlanGroup::for_tier(MaturityTier::Stable), PlanGroup::Priority);
        assert_eq!(PlanGroup::for_tier(MaturityTier::Advanced), PlanGroup::Priority);
        assert_eq!(PlanGroup::for_tier(MaturityTier::Pioneer), PlanGroup::Strength);
    }

    #[test]
    fn every_domain_lands_in_exactly_one_group() {
        let score = score_with(&[("a", 3.0), ("b", 10.0), ("c", 12.0), ("d", 20.0), ("e", 24.0)]);
        let plan = ImprovementPlan::from_score(&score);

        let keys = |items: &[PlanItem]| items.iter().map(|i| i.key.to_string()).collect::<Vec<_>>();
        assert_eq!(keys(plan.group(PlanGroup::Urgent)), vec!["a", "b"]);
        assert_eq!(keys(plan.group(PlanGroup::Priority)), vec!["c", "d"]);
        assert_eq!(keys(plan.group(PlanGroup::Strength)), vec!["e"]);
        assert_eq!(plan.len(), 5);
    }

    #[test]
    fn plan_items_carry_domain_tier() {
        let plan = ImprovementPlan::from_score(&score_with(&[("a", 15.1)]));
        assert_eq!(plan.priority[0].tier, MaturityTier::Advanced);
    }

    #[test]
    fn empty_score_gives_empty_plan() {
        assert!(ImprovementPlan::from_score(&score_with(&[])).is_empty());
    }
}
