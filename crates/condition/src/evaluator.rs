//! Resolves a parsed condition against a JSON document and applies its operator.
use crate::ast::{Comparison, Condition, Operand, Reference};
use crate::config::EvaluatorConfig;
use crate::error::ConditionError;
use crate::operators;
use crate::validator::validate_bounded;
use crate::value::Scalar;
use serde_json::Value;

/// Evaluates `expr` against `document` with the default configuration.
///
/// `Ok(false)` means the condition was evaluated and does not hold. An `Err`
/// means it could not be evaluated: the expression is malformed, or a
/// reference is rejected by the path engine or selects nothing.
pub fn evaluate(document: &Value, expr: &str) -> Result<bool, ConditionError> {
    Evaluator::default().evaluate(document, expr)
}

/// A configured, immutable condition evaluator. Cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn evaluate(&self, document: &Value, expr: &str) -> Result<bool, ConditionError> {
        let condition = validate_bounded(expr, self.config.max_expression_len)?;
        log::debug!("Condition '{}' parsed as {:?}", expr, condition);

        let matched = match &condition {
            Condition::Truthy(operand) => {
                let values = resolve_operand(operand, document)?;
                self.config.multi_match.apply(&values, Scalar::is_truthy)
            }
            Condition::Compare(comparison) => self.compare(comparison, document)?,
        };

        log::trace!("Condition '{}' evaluated to {}", expr, matched);
        Ok(matched)
    }

    fn compare(&self, comparison: &Comparison, document: &Value) -> Result<bool, ConditionError> {
        let left = resolve(&comparison.left, document)?;
        // A right-hand reference always compares against its first match.
        let right = match &comparison.right {
            Operand::Reference(reference) => resolve(reference, document)?.swap_remove(0),
            Operand::Literal(literal) => literal.clone(),
        };
        log::trace!("Comparing {:?} {} {:?}", left, comparison.op, right);

        Ok(self
            .config
            .multi_match
            .apply(&left, |l| operators::compare(comparison.op, l, &right)))
    }
}

fn resolve_operand(operand: &Operand, document: &Value) -> Result<Vec<Scalar>, ConditionError> {
    match operand {
        Operand::Reference(reference) => resolve(reference, document),
        Operand::Literal(literal) => Ok(vec![literal.clone()]),
    }
}

/// Resolves a reference to every scalar it selects. Never returns an empty list.
fn resolve(reference: &Reference, document: &Value) -> Result<Vec<Scalar>, ConditionError> {
    let nodes = hookcheck_jpath::query(&reference.path, document).map_err(|source| {
        ConditionError::PathEngine {
            path: reference.path.clone(),
            source,
        }
    })?;
    if nodes.is_empty() {
        return Err(ConditionError::PathNotFound(reference.path.clone()));
    }
    let values: Vec<Scalar> = nodes.into_iter().map(Scalar::from_json).collect();
    log::trace!("Resolved '{}' to {:?}", reference.path, values);
    Ok(values)
}
