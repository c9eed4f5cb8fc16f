//! The closed set of values a condition compares.
use nom::{Parser, combinator::all_consuming, number::complete::recognize_float};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// A resolved value or literal, reduced to the kinds a comparison understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Numeric),
    String(String),
}

/// A number that keeps integers exact. Integers and floats compare by value,
/// so `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Int(l), Numeric::Int(r)) => Some(l.cmp(r)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(i) => write!(f, "{}", i),
            Numeric::Float(n) => write!(f, "{}", n),
        }
    }
}

impl Scalar {
    /// Converts a resolved JSON node. Arrays and objects keep their compact
    /// JSON text so they can still be compared as strings.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Number(n) => {
                let numeric = n
                    .as_i64()
                    .map(|i| Numeric::Int(i.into()))
                    .or_else(|| n.as_u64().map(|u| Numeric::Int(u.into())))
                    .or_else(|| n.as_f64().map(Numeric::Float));
                match numeric {
                    Some(numeric) => Scalar::Number(numeric),
                    None => Scalar::String(n.to_string()),
                }
            }
            Value::String(s) => Scalar::String(s.clone()),
            Value::Array(_) | Value::Object(_) => Scalar::String(value.to_string()),
        }
    }

    /// Interprets a bare literal token: lowercase booleans first, then numbers,
    /// then strings with one pair of matching quotes removed.
    pub fn from_literal(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "true" => Scalar::Bool(true),
            "false" => Scalar::Bool(false),
            _ => match parse_number(raw) {
                Some(n) => Scalar::Number(n),
                None => Scalar::String(unquote(raw).to_string()),
            },
        }
    }

    /// Coerces the value to a boolean for operator-less conditions.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Number(Numeric::Int(i)) => *i != 0,
            Scalar::Number(Numeric::Float(n)) => *n != 0.0 && !n.is_nan(),
            Scalar::String(s) => !s.is_empty(),
        }
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Number(Numeric::Int(i.into()))
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Number(Numeric::Float(f))
    }
}

impl fmt::Display for Scalar {
    /// The string form used when kinds differ.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

/// Parses plain decimal/exponent syntax, so `inf` and `NaN` stay strings.
/// Integer text stays exact.
pub(crate) fn parse_number(raw: &str) -> Option<Numeric> {
    let (_, digits) = all_consuming(recognize_float::<&str, nom::error::Error<&str>>)
        .parse(raw)
        .ok()?;
    if !digits.contains(['.', 'e', 'E'])
        && let Ok(i) = digits.parse::<i128>()
    {
        return Some(Numeric::Int(i));
    }
    digits.parse().ok().map(Numeric::Float)
}

fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}
