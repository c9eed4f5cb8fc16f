//! A `nom`-based grammar for condition expressions.
//!
//! ```text
//! expression := '{' condition '}' | condition
//! condition  := left_ref operator right_operand | single_operand
//! left_ref   := '{' reference '}' | reference
//! reference  := '$' segment+ | '.' name segment*
//! segment    := '.' name | bracket_group
//! right      := '{' reference '}' | '{' ('true' | 'false') '}' | bare_literal
//! ```
//!
//! A `bracket_group` is consumed as one balanced, opaque unit, quotes
//! included, so operator characters inside `[?(...)]` never split the
//! expression.
use crate::ast::{Comparison, Condition, Operand, Operator, Reference};
use crate::error::ConditionError;
use crate::value::Scalar;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, recognize, value, verify},
    multi::{many0, many1},
    sequence::{delimited, pair},
};

const OPERATOR_CHARS: &str = "=!<>";

/// Deepest `[` nesting a reference may use. Bracket groups parse recursively.
pub(crate) const MAX_BRACKET_DEPTH: usize = 64;

// --- Main Public Parser ---

pub fn parse_condition(input: &str) -> Result<Condition, ConditionError> {
    if bracket_depth(input) > MAX_BRACKET_DEPTH {
        return Err(ConditionError::syntax(
            input,
            format!("brackets nested deeper than {}", MAX_BRACKET_DEPTH),
        ));
    }
    match expression(input) {
        Ok((_, condition)) => Ok(condition),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(ConditionError::syntax(
            input,
            format!("unexpected input at '{}'", e.input),
        )),
        Err(e) => Err(ConditionError::syntax(input, e.to_string())),
    }
}

fn bracket_depth(input: &str) -> usize {
    let (mut depth, mut deepest) = (0usize, 0usize);
    for c in input.chars() {
        match c {
            '[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

// --- Combinators ---

fn expression(input: &str) -> IResult<&str, Condition> {
    alt((
        all_consuming(ws(braced(condition))),
        all_consuming(ws(condition)),
    ))
    .parse(input)
}

fn condition(input: &str) -> IResult<&str, Condition> {
    alt((
        map(
            (left_reference, ws(operator), right_operand),
            |(left, op, right)| Condition::Compare(Comparison { left, op, right }),
        ),
        map(single_operand, Condition::Truthy),
    ))
    .parse(input)
}

fn operator(input: &str) -> IResult<&str, Operator> {
    // Longest match first so `>=` is never read as `>`.
    alt((
        value(Operator::Equals, tag("==")),
        value(Operator::NotEquals, tag("!=")),
        value(Operator::GreaterThanOrEqual, tag(">=")),
        value(Operator::LessThanOrEqual, tag("<=")),
        value(Operator::GreaterThan, tag(">")),
        value(Operator::LessThan, tag("<")),
    ))
    .parse(input)
}

// --- Operand Parsers ---

fn left_reference(input: &str) -> IResult<&str, Reference> {
    alt((braced(reference), reference)).parse(input)
}

fn right_operand(input: &str) -> IResult<&str, Operand> {
    alt((
        map(braced(reference), Operand::Reference),
        map(braced(boolean), |b| Operand::Literal(Scalar::Bool(b))),
        map(bare_literal, |raw| Operand::Literal(Scalar::from_literal(raw))),
    ))
    .parse(input)
}

fn single_operand(input: &str) -> IResult<&str, Operand> {
    alt((
        map(left_reference, Operand::Reference),
        map(braced(boolean), |b| Operand::Literal(Scalar::Bool(b))),
    ))
    .parse(input)
}

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((value(true, tag("true")), value(false, tag("false")))).parse(input)
}

/// Any unbraced token. Stops before a brace so an enclosing `{...}` can close.
fn bare_literal(input: &str) -> IResult<&str, &str> {
    map(
        verify(take_while1(|c: char| c != '{' && c != '}'), |s: &str| {
            let trimmed = s.trim();
            !trimmed.is_empty() && !trimmed.starts_with(|c: char| OPERATOR_CHARS.contains(c))
        }),
        str::trim_end,
    )
    .parse(input)
}

// --- Reference Parsers ---

fn reference(input: &str) -> IResult<&str, Reference> {
    map(
        alt((
            recognize(pair(char('$'), many1(segment))),
            recognize(pair(dot_segment, many0(segment))),
        )),
        |path: &str| Reference {
            path: path.to_string(),
        },
    )
    .parse(input)
}

fn segment(input: &str) -> IResult<&str, &str> {
    alt((dot_segment, bracket_group)).parse(input)
}

fn dot_segment(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('.'), name)).parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && !"[]{}.'\"=!<>".contains(c)).parse(input)
}

fn bracket_group(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('['),
        many0(alt((
            quoted,
            bracket_group,
            take_while1(|c: char| !"[]'\"".contains(c)),
        ))),
        char(']'),
    ))
    .parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    recognize(alt((
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
    )))
    .parse(input)
}

// --- Helpers ---

fn braced<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(char('{'), ws(inner), char('}'))
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}
