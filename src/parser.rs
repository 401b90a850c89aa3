//! This module provides the line grammar shared by the settings and sequence parsers,
//! utilizing the `pest` crate. It splits settings lines into fields and recognises the
//! move alphabet of sequence lines.

use crate::types::{Move, TurtleError};
use pest::{error::InputLocation, Parser as PestParser};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the line grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct LineParser;

/// Splits a settings line into its comma separated fields, trimming each one.
///
/// An empty line yields a single empty field.
pub fn split_fields(line: &str) -> Result<Vec<&str>, TurtleError> {
    let pairs = LineParser::parse(Rule::record, line).map_err(Box::new)?;

    Ok(pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::field)
        .map(|pair| pair.as_str().trim())
        .collect())
}

/// Parses a trimmed, non-empty sequence line into moves.
///
/// # Arguments
///
/// * `line` - The sequence text, already trimmed.
/// * `number` - The 1-based line number, used for error reporting.
pub fn parse_moves(line: &str, number: usize) -> Result<Vec<Move>, TurtleError> {
    let pairs = LineParser::parse(Rule::sequence, line).map_err(|e| unknown_move(line, number, e))?;

    Ok(pairs
        .flatten()
        .filter_map(|pair| match pair.as_rule() {
            Rule::advance => Some(Move::Advance),
            Rule::rotate => Some(Move::Rotate),
            _ => None,
        })
        .collect())
}

/// Turns a grammar failure on a sequence line into an error naming the first
/// character the grammar could not accept.
fn unknown_move(line: &str, number: usize, error: pest::error::Error<Rule>) -> TurtleError {
    let offset = match error.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };

    match line.get(offset..).and_then(|rest| rest.chars().next()) {
        Some(symbol) => TurtleError::UnknownMove {
            symbol,
            line: number,
            column: line[..offset].chars().count() + 1,
        },
        None => TurtleError::Syntax(Box::new(error)),
    }
}
