//! Defines the parsed shape of a condition expression.
use crate::value::Scalar;
use std::fmt;

/// A path expression as written, without any surrounding braces.
/// The text is handed to the path engine unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub path: String,
}

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Equality
    Equals,
    NotEquals,
    // Relational
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
        }
    }

    pub fn is_equality(self) -> bool {
        matches!(self, Operator::Equals | Operator::NotEquals)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Either a reference into the document or a value written in the expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Reference(Reference),
    Literal(Scalar),
}

/// `left op right`. The left side is always a reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: Reference,
    pub op: Operator,
    pub right: Operand,
}

/// The top-level representation of a parsed condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// No operator: the operand's value is checked for truthiness.
    Truthy(Operand),
    Compare(Comparison),
}
