use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Input constraint violation: {field} must be non-negative (got {value})")]
    InputConstraintViolation { field: &'static str, value: String },

    #[error("Scoring configuration error: {0}")]
    Config(String),
}
