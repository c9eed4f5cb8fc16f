//! Contains pure functions for applying comparison operators to scalars.

use crate::ast::Operator;
use crate::value::{Scalar, parse_number};
use std::cmp::Ordering;

/// Applies `op` to two scalars.
///
/// Numbers compare numerically, and a string that reads as a number is
/// compared numerically against a number. If either side is a boolean and
/// the other side is a boolean or the text `true`/`false` in any case,
/// `==` and `!=` compare booleans. Every other pairing, including ordering
/// operators on booleans, compares the string forms. Total over all inputs.
pub fn compare(op: Operator, left: &Scalar, right: &Scalar) -> bool {
    if op.is_equality()
        && let Some((l, r)) = boolean_pair(left, right)
    {
        return apply(op, Some(if l == r { Ordering::Equal } else { Ordering::Less }));
    }
    match (left, right) {
        (Scalar::Number(l), Scalar::Number(r)) => apply(op, l.partial_cmp(r)),
        (Scalar::String(l), Scalar::String(r)) => apply(op, Some(l.cmp(r))),
        (Scalar::Number(n), Scalar::String(s)) => match parse_number(s.trim()) {
            Some(parsed) => apply(op, n.partial_cmp(&parsed)),
            None => by_string_form(op, left, right),
        },
        (Scalar::String(s), Scalar::Number(n)) => match parse_number(s.trim()) {
            Some(parsed) => apply(op, parsed.partial_cmp(n)),
            None => by_string_form(op, left, right),
        },
        _ => by_string_form(op, left, right),
    }
}

/// Both sides as booleans, when one side is a boolean and the other reads as one.
fn boolean_pair(left: &Scalar, right: &Scalar) -> Option<(bool, bool)> {
    match (left, right) {
        (Scalar::Bool(l), other) => as_bool(other).map(|r| (*l, r)),
        (other, Scalar::Bool(r)) => as_bool(other).map(|l| (l, *r)),
        _ => None,
    }
}

fn as_bool(scalar: &Scalar) -> Option<bool> {
    match scalar {
        Scalar::Bool(b) => Some(*b),
        Scalar::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Scalar::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn by_string_form(op: Operator, left: &Scalar, right: &Scalar) -> bool {
    apply(op, Some(left.to_string().cmp(&right.to_string())))
}

fn apply(op: Operator, ordering: Option<Ordering>) -> bool {
    use Operator::*;
    match (op, ordering) {
        (Equals, ord) => ord == Some(Ordering::Equal),
        (NotEquals, ord) => ord != Some(Ordering::Equal),
        (GreaterThan, Some(ord)) => ord.is_gt(),
        (GreaterThanOrEqual, Some(ord)) => ord.is_ge(),
        (LessThan, Some(ord)) => ord.is_lt(),
        (LessThanOrEqual, Some(ord)) => ord.is_le(),
        (_, None) => false,
    }
}
