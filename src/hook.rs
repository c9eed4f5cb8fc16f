// src/hook.rs
use crate::error::CheckError;
use serde::Deserialize;
use serde_json::Value;

/// A named condition checked against a resource document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckHook {
    pub name: String,
    pub condition: String,
}

impl CheckHook {
    pub fn new(name: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            condition: condition.into(),
        }
    }

    /// Evaluates this hook with the default evaluator settings.
    pub fn evaluate(&self, document: &Value) -> Result<bool, CheckError> {
        Ok(hookcheck_condition::evaluate(document, &self.condition)?)
    }
}

/// The result of checking one hook. Hooks are checked independently.
#[derive(Debug)]
pub struct HookOutcome {
    pub name: String,
    pub result: Result<bool, CheckError>,
}

impl HookOutcome {
    /// True only when the condition was evaluated and holds.
    pub fn is_satisfied(&self) -> bool {
        matches!(self.result, Ok(true))
    }
}
