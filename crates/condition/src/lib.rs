//! Comparison conditions over JSON documents.
//!
//! A condition names one field of a document with a path reference and
//! optionally compares it against a literal or a second reference:
//!
//! ```text
//! {$.status.conditions[0].status} == True
//! {.status.readyReplicas} >= {.spec.replicas}
//! $.spec.paused
//! ```
//!
//! Braces mark text that must be a path or a real boolean: `{true}` is a
//! boolean, `{True}` is a syntax error, and a bare `True` is the string
//! `"True"`. Path text is handed to `hookcheck-jpath` unchanged, so filter
//! segments such as `[?(@.type == 'Available')]` are opaque here.

pub mod ast;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod operators;
mod parser;
pub mod validator;
pub mod value;

// --- Public API ---
pub use ast::{Comparison, Condition, Operand, Operator, Reference};
pub use config::{DEFAULT_MAX_EXPRESSION_LEN, EvaluatorConfig, MultiMatch};
pub use error::ConditionError;
pub use evaluator::{Evaluator, evaluate};
pub use validator::{is_valid, validate};
pub use value::{Numeric, Scalar};
