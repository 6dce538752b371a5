//! A single weighted maturity criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ValidationError};

/// Number of maturity rungs every question describes.
pub const LEVEL_COUNT: usize = 5;

/// Lowest weight the editor will store.
pub const MIN_WEIGHT: f64 = 0.1;

/// Highest weight the editor will store.
pub const MAX_WEIGHT: f64 = 5.0;

/// Weight given to questions created through the editor.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A weighted question with one description per maturity rung.
///
/// `levels[0]` describes rung 1 (weakest), `levels[4]` rung 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub weight: f64,
    pub levels: [String; LEVEL_COUNT],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_key: Option<String>,
}

impl Question {
    /// Creates a question from already well-formed parts.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        weight: f64,
        levels: [String; LEVEL_COUNT],
    ) -> Self {
        Self {
            id,
            text: text.into(),
            weight,
            levels,
            icon_key: None,
        }
    }

    /// Creates a question from untyped level input, checking the level count and weight.
    pub fn from_parts(
        id: QuestionId,
        text: impl Into<String>,
        weight: f64,
        levels: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let actual = levels.len();
        let levels: [String; LEVEL_COUNT] =
            levels.try_into().map_err(|_| ValidationError::LevelCount {
                question_id: id.to_string(),
                actual,
            })?;

        let question = Self::new(id, text, weight, levels);
        question.validate()?;
        Ok(question)
    }

    /// Returns the description for a rung in `1..=5`.
    pub fn level(&self, rung: u8) -> Option<&str> {
        let index = usize::from(rung).checked_sub(1)?;
        self.levels.get(index).map(String::as_str)
    }

    /// Checks the weight is a positive finite number.
    ///
    /// The level count is already guaranteed by the array type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ValidationError::InvalidWeight {
                question_id: self.id.to_string(),
                weight: self.weight,
            });
        }
        Ok(())
    }
}

/// Brings an edited weight into the stored range.
///
/// Non-finite and non-positive input is rejected rather than coerced.
pub fn coerce_weight(question_id: &QuestionId, weight: f64) -> Result<f64, ValidationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::InvalidWeight {
            question_id: question_id.to_string(),
            weight,
        });
    }
    Ok(weight.clamp(MIN_WEIGHT, MAX_WEIGHT))
}
