//! A small JSONPath engine for `serde_json` documents.
//!
//! Paths are parsed once into a [`JsonPath`] and resolved against a document
//! root, yielding every matched node. The engine understands dotted keys,
//! quoted keys, indices (negative indices count from the end), wildcards, and
//! simple comparison filters such as `[?(@.type == 'Available')]`.

pub mod ast;
pub mod engine;
pub mod error;
mod parser;

// --- Public API ---
pub use ast::{Filter, FilterOp, JsonPath, PathSegment};
pub use engine::{query, select};
pub use error::JPathError;
pub use parser::parse_path;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn deployment() -> Value {
        json!({
            "kind": "Deployment",
            "spec": { "replicas": 1 },
            "status": {
                "conditions": [
                    { "status": "True", "type": "Progressing" },
                    { "status": "False", "type": "Available" }
                ]
            }
        })
    }

    #[test]
    fn test_query_simple_path() {
        let data = deployment();
        let result = query("$.spec.replicas", &data).unwrap();
        assert_eq!(result, vec![&json!(1)]);
    }

    #[test]
    fn test_query_path_with_index() {
        let data = deployment();
        let result = query("$.status.conditions[1].type", &data).unwrap();
        assert_eq!(result, vec![&json!("Available")]);

        let last = query("$.status.conditions[-1].type", &data).unwrap();
        assert_eq!(last, result);
    }

    #[test]
    fn test_query_missing_selects_nothing() {
        let data = deployment();
        assert!(query("$.spec.missingField", &data).unwrap().is_empty());
        assert!(query("$.status.conditions[5]", &data).unwrap().is_empty());
        assert!(query("$.kind.nested", &data).unwrap().is_empty());
    }

    #[test]
    fn test_query_wildcard() {
        let data = deployment();
        let result = query("$.status.conditions[*].status", &data).unwrap();
        assert_eq!(result, vec![&json!("True"), &json!("False")]);
    }

    #[test]
    fn test_query_filter() {
        let data = deployment();
        let result = query("$.status.conditions[?(@.type == 'Available')].status", &data).unwrap();
        assert_eq!(result, vec![&json!("False")]);
    }

    #[test]
    fn test_query_numeric_filter() {
        let data = json!({
            "store": { "book": [
                { "title": "Cheap", "price": 8 },
                { "title": "Dear", "price": 22.5 }
            ]}
        });
        let result = query("$.store.book[?(@.price > 10)].title", &data).unwrap();
        assert_eq!(result, vec![&json!("Dear")]);
    }

    #[test]
    fn test_root_selection() {
        let data = deployment();
        assert_eq!(query("$", &data).unwrap(), vec![&data]);
    }

    #[test]
    fn test_query_reports_parse_errors() {
        let data = deployment();
        assert!(matches!(
            query("$.status.conditions[x]", &data),
            Err(JPathError::JPathParse(..))
        ));
    }
}
