//! Structural edits on a rubric.
//!
//! Every edit is applied to a copy; the source rubric is never touched, and
//! the copy is re-validated before it is handed back.

use serde::{Deserialize, Serialize};

use super::domain::Domain;
use super::model::Rubric;
use super::question::{coerce_weight, Question, DEFAULT_WEIGHT, LEVEL_COUNT};
use crate::domain::foundation::{DomainKey, QuestionId, ValidationError};
use crate::domain::scoring::MaturityTier;

/// Title given to a domain added without one.
pub const NEW_DOMAIN_TITLE: &str = "مسار تقييم جديد";

/// Text given to a freshly added question.
pub const NEW_QUESTION_TEXT: &str = "نص المعيار التقني الجديد هنا...";

/// One admin edit. Indices refer to current display positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RubricEdit {
    AddDomain {
        #[serde(default)]
        title: Option<String>,
    },
    RemoveDomain {
        domain: usize,
    },
    MoveDomain {
        from: usize,
        to: usize,
    },
    RenameDomain {
        domain: usize,
        title: String,
    },
    AddQuestion {
        domain: usize,
    },
    RemoveQuestion {
        domain: usize,
        question: usize,
    },
    MoveQuestion {
        domain: usize,
        from: usize,
        to: usize,
    },
    UpdateQuestionText {
        domain: usize,
        question: usize,
        text: String,
    },
    UpdateWeight {
        domain: usize,
        question: usize,
        weight: f64,
    },
    UpdateLevel {
        domain: usize,
        question: usize,
        level: usize,
        text: String,
    },
}

impl RubricEdit {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            RubricEdit::AddDomain { .. } => "add_domain",
            RubricEdit::RemoveDomain { .. } => "remove_domain",
            RubricEdit::MoveDomain { .. } => "move_domain",
            RubricEdit::RenameDomain { .. } => "rename_domain",
            RubricEdit::AddQuestion { .. } => "add_question",
            RubricEdit::RemoveQuestion { .. } => "remove_question",
            RubricEdit::MoveQuestion { .. } => "move_question",
            RubricEdit::UpdateQuestionText { .. } => "update_question_text",
            RubricEdit::UpdateWeight { .. } => "update_weight",
            RubricEdit::UpdateLevel { .. } => "update_level",
        }
    }
}

/// Placeholder question appended by [`RubricEdit::AddQuestion`].
pub fn placeholder_question() -> Question {
    let levels: [String; LEVEL_COUNT] = std::array::from_fn(|i| {
        format!("وصف المستوى {}: ({})", i + 1, MaturityTier::ALL[i].label())
    });
    Question::new(QuestionId::generate(), NEW_QUESTION_TEXT, DEFAULT_WEIGHT, levels)
}

impl Rubric {
    /// Applies an edit and returns the edited copy.
    pub fn apply(&self, edit: RubricEdit) -> Result<Rubric, ValidationError> {
        let mut next = self.clone();
        let domains = next.domains_mut();

        match edit {
            RubricEdit::AddDomain { title } => {
                let title = title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| NEW_DOMAIN_TITLE.to_string());
                domains.push(Domain::new(DomainKey::generate(), title));
            }
            RubricEdit::RemoveDomain { domain } => {
                check_index("domain", domain, domains.len())?;
                domains.remove(domain);
            }
            RubricEdit::MoveDomain { from, to } => {
                check_index("from", from, domains.len())?;
                check_index("to", to, domains.len())?;
                let moved = domains.remove(from);
                domains.insert(to, moved);
            }
            RubricEdit::RenameDomain { domain, title } => {
                if title.trim().is_empty() {
                    return Err(ValidationError::empty_field("title"));
                }
                domain_at(domains, domain)?.title = title;
            }
            RubricEdit::AddQuestion { domain } => {
                domain_at(domains, domain)?
                    .questions
                    .push(placeholder_question());
            }
            RubricEdit::RemoveQuestion { domain, question } => {
                let questions = &mut domain_at(domains, domain)?.questions;
                check_index("question", question, questions.len())?;
                questions.remove(question);
            }
            RubricEdit::MoveQuestion { domain, from, to } => {
                let questions = &mut domain_at(domains, domain)?.questions;
                check_index("from", from, questions.len())?;
                check_index("to", to, questions.len())?;
                let moved = questions.remove(from);
                questions.insert(to, moved);
            }
            RubricEdit::UpdateQuestionText {
                domain,
                question,
                text,
            } => {
                question_at(domains, domain, question)?.text = text;
            }
            RubricEdit::UpdateWeight {
                domain,
                question,
                weight,
            } => {
                let q = question_at(domains, domain, question)?;
                q.weight = coerce_weight(&q.id, weight)?;
            }
            RubricEdit::UpdateLevel {
                domain,
                question,
                level,
                text,
            } => {
                check_index("level", level, LEVEL_COUNT)?;
                question_at(domains, domain, question)?.levels[level] = text;
            }
        }

        next.validate()?;
        Ok(next)
    }
}

fn check_index(field: &str, index: usize, len: usize) -> Result<(), ValidationError> {
    if index >= len {
        return Err(ValidationError::index(field, index, len));
    }
    Ok(())
}

fn domain_at(domains: &mut [Domain], index: usize) -> Result<&mut Domain, ValidationError> {
    let len = domains.len();
    domains
        .get_mut(index)
        .ok_or_else(|| ValidationError::index("domain", index, len))
}

fn question_at(
    domains: &mut [Domain],
    domain: usize,
    question: usize,
) -> Result<&mut Question, ValidationError> {
    let questions = &mut domain_at(domains, domain)?.questions;
    let len = questions.len();
    questions
        .get_mut(question)
        .ok_or_else(|| ValidationError::index("question", question, len))
}
