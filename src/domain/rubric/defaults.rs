//! Built-in rubric used on first start and on reset.

use once_cell::sync::Lazy;

use super::model::Rubric;
use crate::domain::foundation::ValidationError;

const DEFAULT_RUBRIC_YAML: &str = include_str!("default_rubric.yaml");

static DEFAULT_RUBRIC: Lazy<Result<Rubric, ValidationError>> = Lazy::new(|| {
    let rubric: Rubric = serde_yaml::from_str(DEFAULT_RUBRIC_YAML)
        .map_err(|e| ValidationError::invalid_format("default_rubric", e.to_string()))?;
    rubric.validate()?;
    Ok(rubric)
});

impl Rubric {
    /// The rubric shipped with the application (seven domains).
    pub fn default_rubric() -> Result<Rubric, ValidationError> {
        DEFAULT_RUBRIC.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rubric::LEVEL_COUNT;

    #[test]
    fn default_rubric_parses_and_validates() {
        let rubric = Rubric::default_rubric().unwrap();
        assert_eq!(rubric.domain_count(), 7);
        assert!(rubric.question_count() >= 7);
    }

    #[test]
    fn default_rubric_questions_have_five_levels_and_valid_weights() {
        let rubric = Rubric::default_rubric().unwrap();
        for question in rubric.domains().iter().flat_map(|d| &d.questions) {
            assert_eq!(question.levels.len(), LEVEL_COUNT);
            assert!(question.weight > 0.0 && question.weight <= 5.0);
            assert!(question.levels.iter().all(|l| !l.is_empty()));
        }
    }

    #[test]
    fn default_rubric_is_stable_across_calls() {
        assert_eq!(Rubric::default_rubric().unwrap(), Rubric::default_rubric().unwrap());
    }
}
