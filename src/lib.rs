//! Readiness checks for JSON resource documents.
//!
//! A check hook is a single condition such as
//! `{$.status.conditions[0].status} == True` evaluated against a decoded
//! JSON document. This crate ties the condition evaluator
//! (`hookcheck-condition`) and the path engine (`hookcheck-jpath`) together
//! behind a small API:
//!
//! ```
//! use serde_json::json;
//!
//! let deployment = json!({ "spec": { "replicas": 1 } });
//! assert!(hookcheck::evaluate_check_hook(&deployment, "{$.spec.replicas} == 1").unwrap());
//! assert!(hookcheck::is_valid("{true}"));
//! assert!(!hookcheck::is_valid("{True}"));
//! ```

pub mod checker;
pub mod error;
pub mod hook;

pub use checker::{Checker, CheckerBuilder};
pub use error::CheckError;
pub use hook::{CheckHook, HookOutcome};

pub use hookcheck_condition::{
    Condition, ConditionError, Evaluator, EvaluatorConfig, MultiMatch, Numeric, Scalar, evaluate,
    is_valid, validate,
};
pub use hookcheck_jpath::JPathError;

use serde_json::Value;

/// Evaluates `expr` against an already-decoded document.
pub fn evaluate_check_hook(document: &Value, expr: &str) -> Result<bool, CheckError> {
    Ok(hookcheck_condition::evaluate(document, expr)?)
}

/// Decodes `json` and evaluates `expr` against it.
pub fn evaluate_check_hook_json(json: &str, expr: &str) -> Result<bool, CheckError> {
    let document: Value = serde_json::from_str(json)?;
    evaluate_check_hook(&document, expr)
}
