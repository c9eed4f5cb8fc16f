// src/checker.rs
use crate::error::CheckError;
use crate::hook::{CheckHook, HookOutcome};
use hookcheck_condition::{Evaluator, EvaluatorConfig, MultiMatch};
use serde_json::Value;

/// A builder for creating a `Checker`.
#[derive(Debug, Clone, Default)]
pub struct CheckerBuilder {
    config: EvaluatorConfig,
}

impl CheckerBuilder {
    /// Creates a new `CheckerBuilder` with default settings.
    pub fn new() -> Self { Default::default() }

    /// Replaces every setting with `config`, e.g. one deserialized from a file.
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self { self.config = config; self }

    /// Selects how references that match several nodes are compared.
    pub fn with_multi_match(mut self, policy: MultiMatch) -> Self { self.config.multi_match = policy; self }

    /// Sets the longest expression, in bytes, that will be parsed.
    pub fn with_max_expression_len(mut self, len: usize) -> Self { self.config.max_expression_len = len; self }

    /// Consumes the builder and creates the `Checker`.
    pub fn build(self) -> Result<Checker, CheckError> {
        if self.config.max_expression_len == 0 {
            return Err(CheckError::Config(
                "max_expression_len must be greater than zero".to_string(),
            ));
        }
        Ok(Checker {
            evaluator: Evaluator::new(self.config),
        })
    }
}

/// Evaluates conditions with a fixed configuration. Immutable and shareable across threads.
#[derive(Debug, Clone)]
pub struct Checker {
    evaluator: Evaluator,
}

impl Checker {
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Evaluates a single condition against `document`.
    pub fn check(&self, document: &Value, expr: &str) -> Result<bool, CheckError> {
        Ok(self.evaluator.evaluate(document, expr)?)
    }

    /// Evaluates every hook independently and reports each outcome in order.
    pub fn check_all(&self, document: &Value, hooks: &[CheckHook]) -> Vec<HookOutcome> {
        hooks
            .iter()
            .map(|hook| {
                let result = self.check(document, &hook.condition);
                log::debug!("Hook '{}' -> {:?}", hook.name, result);
                HookOutcome {
                    name: hook.name.clone(),
                    result,
                }
            })
            .collect()
    }
}
