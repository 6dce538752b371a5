//! A named, ordered group of questions scored on its own 0-25 scale.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::question::Question;
use crate::domain::foundation::{DomainKey, QuestionId, ValidationError};

/// A rubric domain. Question order is display order only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub key: DomainKey,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Domain {
    /// Creates a domain with no questions.
    pub fn new(key: DomainKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Adds a question, builder style.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Finds a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Current position of a question.
    pub fn position_of(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    /// Checks every question and the uniqueness of question ids.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if question.id.as_str().trim().is_empty() {
                return Err(ValidationError::empty_field("question_id"));
            }
            if !seen.insert(&question.id) {
                return Err(ValidationError::duplicate(
                    "question id",
                    question.id.as_str(),
                ));
            }
            question.validate()?;
        }
        Ok(())
    }
}
