//! The evaluation engine for resolving a parsed `JsonPath` against a `serde_json::Value`.
use super::ast::{Filter, FilterOp, JsonPath, PathSegment};
use super::parser::parse_path;
use crate::error::JPathError;
use serde_json::Value;
use std::cmp::Ordering;

/// Selects every node matched by `path`, in document order.
///
/// Missing keys, out-of-range indices and segments applied to the wrong kind
/// of node select nothing; an empty result is not an error.
pub fn select<'a>(path: &JsonPath, root: &'a Value) -> Vec<&'a Value> {
    select_segments(&path.segments, root)
}

/// Parses `path` and selects its matches from `root` in one step.
pub fn query<'a>(path: &str, root: &'a Value) -> Result<Vec<&'a Value>, JPathError> {
    let parsed = parse_path(path)?;
    Ok(select(&parsed, root))
}

fn select_segments<'a>(segments: &[PathSegment], start: &'a Value) -> Vec<&'a Value> {
    let mut current = vec![start];
    for segment in segments {
        current = current
            .into_iter()
            .flat_map(|node| apply_segment(segment, node))
            .collect();
        if current.is_empty() {
            break;
        }
    }
    current
}

fn apply_segment<'a>(segment: &PathSegment, node: &'a Value) -> Vec<&'a Value> {
    match segment {
        PathSegment::Key(key) => node.get(key.as_str()).into_iter().collect(),
        PathSegment::Index(index) => node
            .as_array()
            .and_then(|arr| {
                let len = arr.len() as i64;
                let resolved = if *index < 0 { len + index } else { *index };
                if (0..len).contains(&resolved) {
                    arr.get(resolved as usize)
                } else {
                    None
                }
            })
            .into_iter()
            .collect(),
        PathSegment::Wildcard => children(node),
        PathSegment::Filter(filter) => children(node)
            .into_iter()
            .filter(|child| filter_matches(filter, child))
            .collect(),
    }
}

fn children(node: &Value) -> Vec<&Value> {
    match node {
        Value::Array(arr) => arr.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => vec![],
    }
}

fn filter_matches(filter: &Filter, element: &Value) -> bool {
    let subjects = select_segments(&filter.subject, element);
    match &filter.comparison {
        None => subjects
            .iter()
            .any(|v| !matches!(v, Value::Null | Value::Bool(false))),
        Some((op, literal)) => subjects.iter().any(|v| compare(v, *op, literal)),
    }
}

fn compare(left: &Value, op: FilterOp, right: &Value) -> bool {
    let ordering = match (left, right) {
        (Value::Number(l), Value::Number(r)) => match (l.as_f64(), r.as_f64()) {
            (Some(l), Some(r)) => l.partial_cmp(&r),
            _ => None,
        },
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        _ if left == right => Some(Ordering::Equal),
        _ => None,
    };
    match (op, ordering) {
        (FilterOp::Equals, ord) => ord == Some(Ordering::Equal),
        (FilterOp::NotEquals, ord) => ord != Some(Ordering::Equal),
        (FilterOp::LessThan, Some(ord)) => ord.is_lt(),
        (FilterOp::LessThanOrEqual, Some(ord)) => ord.is_le(),
        (FilterOp::GreaterThan, Some(ord)) => ord.is_gt(),
        (FilterOp::GreaterThanOrEqual, Some(ord)) => ord.is_ge(),
        (_, None) => false,
    }
}
