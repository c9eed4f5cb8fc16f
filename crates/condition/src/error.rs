use hookcheck_jpath::JPathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    #[error("Expression syntax error in '{expression}': {reason}")]
    Syntax { expression: String, reason: String },

    #[error("Path '{0}' not found in document")]
    PathNotFound(String),

    #[error("Path engine rejected '{path}': {source}")]
    PathEngine {
        path: String,
        #[source]
        source: JPathError,
    },
}

impl ConditionError {
    pub(crate) fn syntax(expression: &str, reason: impl Into<String>) -> Self {
        ConditionError::Syntax {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ConditionError::Syntax { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConditionError::PathNotFound(_))
    }
}
