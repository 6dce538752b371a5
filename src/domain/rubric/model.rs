//! The rubric: the versioned list of domains an assessment is answered against.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::domain::Domain;
use super::question::Question;
use crate::domain::foundation::{DomainKey, QuestionId, ValidationError};

/// Ordered list of domains.
///
/// Serializes as a bare JSON/YAML array of domains. Deserialized rubrics are
/// not validated automatically; stores call [`Rubric::validate`] after loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rubric {
    domains: Vec<Domain>,
}

impl Rubric {
    /// Creates a rubric, validating every invariant.
    pub fn new(domains: Vec<Domain>) -> Result<Self, ValidationError> {
        let rubric = Self { domains };
        rubric.validate()?;
        Ok(rubric)
    }

    /// Domains in display order.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Finds a domain by key.
    pub fn domain(&self, key: &DomainKey) -> Option<&Domain> {
        self.domains.iter().find(|d| &d.key == key)
    }

    /// Finds a question by domain key and question id.
    pub fn question(&self, key: &DomainKey, id: &QuestionId) -> Option<&Question> {
        self.domain(key).and_then(|d| d.question(id))
    }

    /// Number of domains.
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Total number of questions across all domains.
    pub fn question_count(&self) -> usize {
        self.domains.iter().map(|d| d.questions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Checks keys are present and unique and that every domain is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut keys = HashSet::new();
        for domain in &self.domains {
            if domain.key.as_str().trim().is_empty() {
                return Err(ValidationError::empty_field("domain_key"));
            }
            if !keys.insert(&domain.key) {
                return Err(ValidationError::duplicate("domain key", domain.key.as_str()));
            }
            domain.validate()?;
        }
        Ok(())
    }

    /// Serializes the rubric as pretty JSON, the admin export format.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn domains_mut(&mut self) -> &mut Vec<Domain> {
        &mut self.domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        let levels = (1..=5).map(|n| format!("L{n}")).collect();
        Question::from_parts(QuestionId::new(id).unwrap(), "text", 1.0, levels).unwrap()
    }

    fn domain(key: &str, ids: &[&str]) -> Domain {
        ids.iter().fold(
            Domain::new(DomainKey::new(key).unwrap(), key.to_uppercase()),
            |d, id| d.with_question(question(id)),
        )
    }

    #[test]
    fn new_counts_domains_and_questions() {
        let rubric = Rubric::new(vec![domain("a", &["1", "2"]), domain("b", &["1"])]).unwrap();
        assert_eq!(rubric.domain_count(), 2);
        assert_eq!(rubric.question_count(), 3);
    }

    #[test]
    fn question_ids_only_need_to_be_unique_within_a_domain() {
        let rubric = Rubric::new(vec![domain("a", &["1"]), domain("b", &["1"])]);
        assert!(rubric.is_ok());
    }

    #[test]
    fn new_rejects_duplicate_domain_keys() {
        let err = Rubric::new(vec![domain("a", &["1"]), domain("a", &["2"])]).unwrap_err();
        assert_eq!(err, ValidationError::duplicate("domain key", "a"));
    }

    #[test]
    fn lookup_by_key_and_id() {
        let rubric = Rubric::new(vec![domain("a", &["1", "2"])]).unwrap();
        let key = DomainKey::new("a").unwrap();
        let id = QuestionId::new("2").unwrap();
        assert!(rubric.question(&key, &id).is_some());
        assert!(rubric.domain(&DomainKey::new("z").unwrap()).is_none());
    }

    #[test]
    fn serializes_as_array_of_domains() {
        let rubric = Rubric::new(vec![domain("a", &["1"])]).unwrap();
        let json = rubric.to_json_pretty().unwrap();
        assert!(json.trim_start().starts_with('['));

        let back: Rubric = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rubric);
    }

    #[test]
    fn deserialized_duplicates_fail_validation() {
        let json = r#"[
            {"key":"a","title":"A","questions":[]},
            {"key":"a","title":"A2","questions":[]}
        ]"#;
        let rubric: Rubric = serde_json::from_str(json).unwrap();
        assert!(rubric.validate().is_err());
    }
}
