//! A `nom`-based parser for JSONPath expressions.
use super::ast::{Filter, FilterOp, JsonPath, PathSegment};
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, i64 as nom_i64, multispace0},
    combinator::{map, opt, value},
    multi::many0,
    number::complete::double,
    sequence::{delimited, pair, preceded},
};
use serde_json::{Value, json};

/// Filters nest through recursive segment parsing, so depth is capped up front.
const MAX_NESTING: usize = 64;

// --- Main Public Parser ---

pub fn parse_path(input: &str) -> Result<JsonPath, JPathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JPathError::JPathParse(
            input.to_string(),
            "Path is empty".to_string(),
        ));
    }
    if nesting_depth(trimmed) > MAX_NESTING {
        return Err(JPathError::JPathParse(
            input.to_string(),
            format!("Brackets nested deeper than {}", MAX_NESTING),
        ));
    }
    match path(trimmed) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rem, _)) => Err(JPathError::JPathParse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(JPathError::JPathParse(input.to_string(), e.to_string())),
    }
}

fn nesting_depth(input: &str) -> usize {
    input
        .chars()
        .scan(0usize, |depth, c| {
            match c {
                '[' => *depth += 1,
                ']' => *depth = depth.saturating_sub(1),
                _ => {}
            }
            Some(*depth)
        })
        .max()
        .unwrap_or(0)
}

// --- Combinators ---

fn path(input: &str) -> IResult<&str, JsonPath> {
    map(preceded(opt(char('$')), many0(segment)), |segments| JsonPath {
        segments,
    })
    .parse(input)
}

fn segment(input: &str) -> IResult<&str, PathSegment> {
    alt((dot_segment, bracket_segment)).parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-').parse(input)
}

fn dot_segment(input: &str) -> IResult<&str, PathSegment> {
    preceded(
        char('.'),
        alt((
            value(PathSegment::Wildcard, char('*')),
            map(name, |s: &str| PathSegment::Key(s.to_string())),
        )),
    )
    .parse(input)
}

fn bracket_segment(input: &str) -> IResult<&str, PathSegment> {
    delimited(
        char('['),
        ws(alt((
            value(PathSegment::Wildcard, char('*')),
            map(quoted, |s: &str| PathSegment::Key(s.to_string())),
            map(nom_i64, PathSegment::Index),
            map(filter, PathSegment::Filter),
        ))),
        char(']'),
    )
    .parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
    ))
    .parse(input)
}

// --- Filter Parsers ---

fn filter(input: &str) -> IResult<&str, Filter> {
    preceded(
        pair(char('?'), multispace0),
        delimited(char('('), ws(filter_body), char(')')),
    )
    .parse(input)
}

fn filter_body(input: &str) -> IResult<&str, Filter> {
    map(
        pair(
            preceded(char('@'), many0(segment)),
            opt(pair(ws(filter_op), filter_literal)),
        ),
        |(subject, comparison)| Filter {
            subject,
            comparison,
        },
    )
    .parse(input)
}

fn filter_op(input: &str) -> IResult<&str, FilterOp> {
    alt((
        value(FilterOp::Equals, tag("==")),
        value(FilterOp::NotEquals, tag("!=")),
        value(FilterOp::LessThanOrEqual, tag("<=")),
        value(FilterOp::GreaterThanOrEqual, tag(">=")),
        value(FilterOp::LessThan, tag("<")),
        value(FilterOp::GreaterThan, tag(">")),
    ))
    .parse(input)
}

fn filter_literal(input: &str) -> IResult<&str, Value> {
    alt((
        value(json!(true), tag("true")),
        value(json!(false), tag("false")),
        value(Value::Null, tag("null")),
        map(quoted, |s: &str| json!(s)),
        map(double, Value::from),
    ))
    .parse(input)
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_path() {
        let parsed = parse_path("$.spec.replicas").unwrap();
        assert_eq!(
            parsed.segments,
            vec![
                PathSegment::Key("spec".into()),
                PathSegment::Key("replicas".into())
            ]
        );
    }

    #[test]
    fn test_root_is_implied() {
        assert_eq!(parse_path(".spec").unwrap(), parse_path("$.spec").unwrap());
    }

    #[test]
    fn test_parse_indices_and_wildcards() {
        let parsed = parse_path("$.items[-1].ports[*].name").unwrap();
        assert_eq!(
            parsed.segments,
            vec![
                PathSegment::Key("items".into()),
                PathSegment::Index(-1),
                PathSegment::Key("ports".into()),
                PathSegment::Wildcard,
                PathSegment::Key("name".into()),
            ]
        );
    }

    #[test]
    fn test_parse_quoted_key() {
        let parsed = parse_path("$.metadata.labels['app.kubernetes.io/name']").unwrap();
        assert_eq!(
            parsed.segments[2],
            PathSegment::Key("app.kubernetes.io/name".into())
        );
    }

    #[test]
    fn test_parse_filter() {
        let parsed = parse_path("$.store.book[?(@.price > 10)].title").unwrap();
        assert_eq!(
            parsed.segments[2],
            PathSegment::Filter(Filter {
                subject: vec![PathSegment::Key("price".into())],
                comparison: Some((FilterOp::GreaterThan, json!(10.0))),
            })
        );
    }

    #[test]
    fn test_parse_existence_filter() {
        let parsed = parse_path("$.items[?(@.ready)]").unwrap();
        assert!(matches!(
            &parsed.segments[1],
            PathSegment::Filter(Filter { comparison: None, .. })
        ));
    }

    #[test]
    fn test_unsupported_filter_is_rejected() {
        let err = parse_path("$.store.book[?(@.author CONTAINS 'Smith')]").unwrap_err();
        assert!(matches!(err, JPathError::JPathParse(..)));
    }

    #[test]
    fn test_malformed_index_is_rejected() {
        assert!(parse_path("$.items[abc]").is_err());
        assert!(parse_path("$.items[0").is_err());
        assert!(parse_path("").is_err());
    }

    #[test]
    fn test_deeply_nested_filters_are_rejected() {
        let deep = format!("${}", "[?(@.a".repeat(500));
        let err = parse_path(&deep).unwrap_err();
        assert!(matches!(err, JPathError::JPathParse(..)));
        assert!(parse_path("$.a[?(@.b)]").is_ok());
    }
}
