//! Field rules for request bodies, checked after JSON decoding.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at least {min}")]
    TooSmall { field: &'static str, min: i32 },

    #[error("score cannot exceed totalQuestions")]
    ScoreExceedsTotal,
}

/// Implemented by every write payload
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Non-blank string field
pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn at_least(field: &'static str, value: i32, min: i32) -> Result<(), ValidationError> {
    if value < min {
        return Err(ValidationError::TooSmall { field, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_missing() {
        assert_eq!(required("content", "   "), Err(ValidationError::Required("content")));
        assert_eq!(required("content", ""), Err(ValidationError::Required("content")));
        assert!(required("content", "Still waters").is_ok());
    }

    #[test]
    fn lower_bound_is_inclusive() {
        assert!(at_least("chapter", 1, 1).is_ok());
        let err = at_least("chapter", 0, 1).unwrap_err();
        assert_eq!(err.to_string(), "chapter must be at least 1");
    }
}
