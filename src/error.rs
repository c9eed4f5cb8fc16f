// src/error.rs
use hookcheck_condition::ConditionError;
use thiserror::Error;

/// Errors surfaced by the check-hook entry points.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Condition could not be evaluated: {0}")]
    Condition(#[from] ConditionError),

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checker configuration is invalid: {0}")]
    Config(String),
}

impl CheckError {
    /// The underlying condition error, if this is one.
    pub fn as_condition(&self) -> Option<&ConditionError> {
        match self {
            CheckError::Condition(e) => Some(e),
            _ => None,
        }
    }
}
