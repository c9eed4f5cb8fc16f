//! Defines the Abstract Syntax Tree (AST) for JSONPath expressions.
use serde_json::Value;

/// A parsed path. Paths are always evaluated from the document root.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPath {
    pub segments: Vec<PathSegment>,
}

/// Represents a segment in a JSONPath selection.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// An object key (e.g., `.name` or `['name']`).
    Key(String),
    /// An array index (e.g., `[0]`). Negative values count from the end.
    Index(i64),
    /// Every child of an object or array (`.*` or `[*]`).
    Wildcard,
    /// Array elements matching a predicate (e.g., `[?(@.price > 10)]`).
    Filter(Filter),
}

/// A predicate evaluated against each element of an array.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Path relative to the element under test (`@`).
    pub subject: Vec<PathSegment>,
    /// `None` tests the subject for existence and truthiness.
    pub comparison: Option<(FilterOp, Value)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}
