use serde::Deserialize;

/// Expressions longer than this are rejected before parsing.
pub const DEFAULT_MAX_EXPRESSION_LEN: usize = 4096;

/// How a left-hand reference that selects several nodes is compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiMatch {
    /// Only the first match in document order is used.
    #[default]
    First,
    /// The condition holds if any match satisfies it.
    Any,
    /// The condition holds only if every match satisfies it.
    All,
}

impl MultiMatch {
    /// Applies `test` to `values` according to the policy. `values` is never empty
    /// when called from the evaluator.
    pub fn apply<T>(self, values: &[T], test: impl FnMut(&T) -> bool) -> bool {
        match self {
            MultiMatch::First => values.first().is_some_and(test),
            MultiMatch::Any => values.iter().any(test),
            MultiMatch::All => !values.is_empty() && values.iter().all(test),
        }
    }
}

/// Settings for an [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub multi_match: MultiMatch,
    pub max_expression_len: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            multi_match: MultiMatch::default(),
            max_expression_len: DEFAULT_MAX_EXPRESSION_LEN,
        }
    }
}
