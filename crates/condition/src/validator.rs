//! Syntactic gatekeeper for condition expressions. Never touches document data.
use crate::ast::Condition;
use crate::config::DEFAULT_MAX_EXPRESSION_LEN;
use crate::error::ConditionError;
use crate::parser::parse_condition;

/// Returns `true` if `expr` is well-formed enough to attempt evaluation.
pub fn is_valid(expr: &str) -> bool {
    validate(expr).is_ok()
}

/// Parses `expr`, reporting why it is malformed when it is.
pub fn validate(expr: &str) -> Result<Condition, ConditionError> {
    validate_bounded(expr, DEFAULT_MAX_EXPRESSION_LEN)
}

pub(crate) fn validate_bounded(expr: &str, max_len: usize) -> Result<Condition, ConditionError> {
    if expr.len() > max_len {
        return Err(ConditionError::syntax(
            expr,
            format!("expression is longer than {} bytes", max_len),
        ));
    }
    parse_condition(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_table() {
        let cases = [
            ("simple expression", "$.spec.replicas", true),
            ("no $ at the start", "{.spec.replicas}", true),
            ("element in array", "{$.status.conditions[0].status}", true),
            ("ready replicas", "{$.status.readyReplicas}", true),
            ("container ready", "{$.status.containerStatuses[0].ready}", true),
            ("capitalised True in braces", "{True}", false),
            ("capitalised False in braces", "{False}", false),
            ("lowercase true in braces", "{true}", true),
            ("lowercase false in braces", "{false}", true),
            ("braced replicas", "{$.spec.replicas}", true),
            (
                "== with filter on the left",
                "$.store.book[?(@.price > 10)].title==$.store.book[0].title",
                true,
            ),
            (
                "> with quoted filter on the left",
                "$.store.book[?(@.author CONTAINS 'Smith')].price>20",
                true,
            ),
            (">= operator", "$.user.age>=$.minimum.age", true),
            ("< operator", "$.user.age<$.maximum.age", true),
            ("<= operator", "$.user.age<=$.maximum.age", true),
            ("!= operator", "$.user.age!=$.maximum.age", true),
        ];

        for (name, expr, want) in cases {
            assert_eq!(is_valid(expr), want, "{}: is_valid({:?})", name, expr);
        }
    }

    #[test]
    fn test_right_hand_literals() {
        assert!(is_valid("{$.status.conditions[0].status} == True"));
        assert!(is_valid("{$.status.phase} == \"Running\""));
        assert!(is_valid("{$.status.phase} != 'Pending Approval'"));
        assert!(is_valid("{$.spec.replicas} == {$.status.readyReplicas}"));
        assert!(is_valid("{$.ready} == {true}"));
        assert!(!is_valid("{$.status.conditions[0].status} == {True}"));
        assert!(!is_valid("{$.status.phase} == {Running}"));
    }

    #[test]
    fn test_is_valid_is_pure() {
        for expr in ["{True}", "{true}", "$.a >= 3", "garbage"] {
            assert_eq!(is_valid(expr), is_valid(expr));
        }
    }

    #[test]
    fn test_validate_reports_reason() {
        match validate("{True}") {
            Err(ConditionError::Syntax { expression, reason }) => {
                assert_eq!(expression, "{True}");
                assert!(!reason.is_empty());
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_overlong_expression_is_rejected() {
        let expr = format!("$.{}", "a".repeat(64));
        assert!(validate_bounded(&expr, 1024).is_ok());
        assert!(validate_bounded(&expr, 16).unwrap_err().is_syntax());
    }

    #[test]
    fn test_deeply_nested_brackets_are_invalid() {
        for n in [65, 1000, 2000] {
            let expr = format!("$.a{}{}", "[".repeat(n), "]".repeat(n));
            assert!(expr.len() <= DEFAULT_MAX_EXPRESSION_LEN);
            assert!(!is_valid(&expr), "depth {}", n);
            assert!(validate(&expr).unwrap_err().is_syntax());
        }
        assert!(is_valid("$.a[[[0]]]"));
    }

    #[test]
    fn test_reference_needs_root_or_dot() {
        assert!(!is_valid("[0]"));
        assert!(!is_valid("{[0]}"));
        assert!(!is_valid("[0] == 1"));
        assert!(is_valid("$[0]"));
        assert!(is_valid("{.items[0]}"));
    }
}
