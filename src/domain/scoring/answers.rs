//! Answer values and answer sets.
//!
//! Internally answers are keyed by domain key and question id, so reordering
//! or inserting questions never misaligns a stored answer. The positional
//! array form (`{ domainKey: [null, 0, 3, ...] }`) is kept only as the wire
//! format and is always interpreted against a specific rubric.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::domain::foundation::{DomainKey, QuestionId, ValidationError};
use crate::domain::rubric::{Domain, Rubric};

/// Wire form of an answer set: one array per domain, aligned with question order.
pub type PositionalAnswers = BTreeMap<DomainKey, Vec<Option<u8>>>;

/// Selected maturity rung, 1 (weakest) to 5 (strongest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaturityRung(u8);

impl MaturityRung {
    pub const LOWEST: Self = Self(1);
    pub const HIGHEST: Self = Self(5);

    /// Creates a rung, returning error outside `1..=5`.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("rung", 1, 5, i64::from(value)));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MaturityRung {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<MaturityRung> for u8 {
    fn from(rung: MaturityRung) -> Self {
        rung.0
    }
}

impl fmt::Display for MaturityRung {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The answer to one question.
///
/// `NotApplicable` scores like `Unanswered` but counts as answered for
/// completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<u8>", into = "Option<u8>")]
pub enum AnswerValue {
    #[default]
    Unanswered,
    NotApplicable,
    Rung(MaturityRung),
}

impl AnswerValue {
    /// Parses the wire form: `null`, `0` or `1..=5`.
    pub fn from_wire(value: Option<u8>) -> Result<Self, ValidationError> {
        match value {
            None => Ok(AnswerValue::Unanswered),
            Some(0) => Ok(AnswerValue::NotApplicable),
            Some(v) => MaturityRung::try_new(v)
                .map(AnswerValue::Rung)
                .map_err(|_| ValidationError::out_of_range("answer", 0, 5, i64::from(v))),
        }
    }

    /// Convenience constructor for a rung answer.
    pub fn rung(value: u8) -> Result<Self, ValidationError> {
        MaturityRung::try_new(value).map(AnswerValue::Rung)
    }

    /// Returns the wire form.
    pub fn to_wire(self) -> Option<u8> {
        match self {
            AnswerValue::Unanswered => None,
            AnswerValue::NotApplicable => Some(0),
            AnswerValue::Rung(r) => Some(r.value()),
        }
    }

    /// Anything but `Unanswered` is a final response.
    pub fn is_answered(self) -> bool {
        !matches!(self, AnswerValue::Unanswered)
    }
}

impl TryFrom<Option<u8>> for AnswerValue {
    type Error = ValidationError;

    fn try_from(value: Option<u8>) -> Result<Self, Self::Error> {
        Self::from_wire(value)
    }
}

impl From<AnswerValue> for Option<u8> {
    fn from(value: AnswerValue) -> Self {
        value.to_wire()
    }
}

/// Answers keyed by question identity. Missing entries are unanswered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<DomainKey, HashMap<QuestionId, AnswerValue>>,
}

impl Answers {
    /// An empty answer set; every question reads as unanswered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every question of the rubric with the same value.
    pub fn uniform(rubric: &Rubric, value: AnswerValue) -> Self {
        let mut answers = Self::new();
        for domain in rubric.domains() {
            for question in &domain.questions {
                answers.set(&domain.key, &question.id, value);
            }
        }
        answers
    }

    /// Records an answer and returns the previous one. Last write wins.
    pub fn set(
        &mut self,
        domain: &DomainKey,
        question: &QuestionId,
        value: AnswerValue,
    ) -> AnswerValue {
        if value == AnswerValue::Unanswered {
            let previous = self
                .values
                .get_mut(domain)
                .and_then(|d| d.remove(question));
            return previous.unwrap_or_default();
        }
        self.values
            .entry(domain.clone())
            .or_default()
            .insert(question.clone(), value)
            .unwrap_or_default()
    }

    /// Builder form of [`Answers::set`].
    pub fn with(mut self, domain: &DomainKey, question: &QuestionId, value: AnswerValue) -> Self {
        self.set(domain, question, value);
        self
    }

    /// Reads an answer; unknown questions are unanswered.
    pub fn get(&self, domain: &DomainKey, question: &QuestionId) -> AnswerValue {
        self.values
            .get(domain)
            .and_then(|d| d.get(question))
            .copied()
            .unwrap_or_default()
    }

    /// Answers of one domain, in that domain's question order.
    pub fn for_domain<'a>(&'a self, domain: &'a Domain) -> impl Iterator<Item = AnswerValue> + 'a {
        domain.questions.iter().map(move |q| self.get(&domain.key, &q.id))
    }

    /// Reads the positional wire form against the rubric it was answered with.
    ///
    /// Slots beyond a domain's question count are ignored and missing slots
    /// read as unanswered; domains absent from the rubric are dropped.
    pub fn from_positional(
        rubric: &Rubric,
        positional: &PositionalAnswers,
    ) -> Result<Self, ValidationError> {
        let mut answers = Self::new();
        for domain in rubric.domains() {
            let Some(slots) = positional.get(&domain.key) else {
                continue;
            };
            for (question, slot) in domain.questions.iter().zip(slots.iter()) {
                let value = AnswerValue::from_wire(*slot)?;
                answers.set(&domain.key, &question.id, value);
            }
        }
        Ok(answers)
    }

    /// Writes the positional wire form aligned with the rubric's current order.
    ///
    /// Every domain gets an array of exactly its question count.
    pub fn to_positional(&self, rubric: &Rubric) -> PositionalAnswers {
        rubric
            .domains()
            .iter()
            .map(|domain| {
                let slots = self.for_domain(domain).map(AnswerValue::to_wire).collect();
                (domain.key.clone(), slots)
            })
            .collect()
    }
}
