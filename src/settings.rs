//! Parses the board configuration: board size, turtle start, exit and mines.
//!
//! Parsing is a single pure function over the raw lines. It stops at the first
//! invalid line or field; no partial settings are ever returned.

use crate::{
    parser::split_fields,
    types::{
        BoardSize, Coordinate, Direction, Limits, Record, Settings, TurtleError, TurtleStart,
    },
};
use std::collections::HashSet;
use tracing::debug;

/// Parses settings lines into a validated [`Settings`].
///
/// # Arguments
///
/// * `lines` - The settings lines in file order.
/// * `limits` - Upper bound for the board dimensions.
///
/// # Returns
///
/// * `Ok(Settings)` if every line is valid.
/// * `Err(TurtleError::MissingLines)` if fewer than three lines are given.
/// * `Err(TurtleError)` describing the first invalid line otherwise.
pub fn parse_settings<S: AsRef<str>>(
    lines: &[S],
    limits: &Limits,
) -> Result<Settings, TurtleError> {
    if lines.len() < 3 {
        return Err(TurtleError::MissingLines(lines.len()));
    }

    let board = parse_board_size(lines[0].as_ref(), limits)?;
    let start = parse_start(lines[1].as_ref(), &board)?;
    let exit = parse_coordinate(lines[2].as_ref(), Record::Exit, &board)?;
    let mines = parse_mines(&lines[3..], &board)?;

    debug!(
        columns = board.columns,
        rows = board.rows,
        mines = mines.len(),
        "parsed settings"
    );

    Ok(Settings {
        board,
        start,
        exit,
        mines,
    })
}

fn parse_board_size(line: &str, limits: &Limits) -> Result<BoardSize, TurtleError> {
    let fields = record_fields(line, Record::BoardSize)?;
    let max = limits.max_board_size;

    Ok(BoardSize {
        columns: parse_number(fields[0], Record::BoardSize, "columns", 1, max)?,
        rows: parse_number(fields[1], Record::BoardSize, "rows", 1, max)?,
    })
}

fn parse_start(line: &str, board: &BoardSize) -> Result<TurtleStart, TurtleError> {
    let fields = record_fields(line, Record::Start)?;
    let position = coordinate_from(&fields, Record::Start, board)?;
    let facing = parse_direction(fields[2])?;

    Ok(TurtleStart { position, facing })
}

/// Mines start on the fourth line; line numbers in errors are 1-based.
fn parse_mines<S: AsRef<str>>(
    lines: &[S],
    board: &BoardSize,
) -> Result<HashSet<Coordinate>, TurtleError> {
    let mut mines = HashSet::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let number = i + 4;
        let coordinate = parse_coordinate(line.as_ref(), Record::Mine(number), board)?;

        if !mines.insert(coordinate) {
            return Err(TurtleError::DuplicateMine {
                coordinate,
                line: number,
            });
        }
    }

    Ok(mines)
}

fn parse_coordinate(
    line: &str,
    record: Record,
    board: &BoardSize,
) -> Result<Coordinate, TurtleError> {
    let fields = record_fields(line, record)?;
    coordinate_from(&fields, record, board)
}

/// Reads the column and row from the first two fields of a record.
fn coordinate_from(
    fields: &[&str],
    record: Record,
    board: &BoardSize,
) -> Result<Coordinate, TurtleError> {
    let column = parse_number(fields[0], record, "column", 0, board.columns - 1)?;
    let row = parse_number(fields[1], record, "row", 0, board.rows - 1)?;

    Ok(Coordinate { column, row })
}

/// Splits a line and checks it has exactly as many fields as the record needs.
fn record_fields(line: &str, record: Record) -> Result<Vec<&str>, TurtleError> {
    let fields = split_fields(line)?;

    if fields.len() != record.arity() {
        return Err(TurtleError::FieldCount {
            record,
            expected: record.arity(),
            found: fields.len(),
        });
    }

    Ok(fields)
}

fn parse_number(
    value: &str,
    record: Record,
    field: &'static str,
    min: u32,
    max: u32,
) -> Result<u32, TurtleError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| (min..=max).contains(n))
        .ok_or_else(|| TurtleError::OutOfRange {
            record,
            field,
            value: value.to_string(),
            min,
            max,
        })
}

fn parse_direction(value: &str) -> Result<Direction, TurtleError> {
    let mut chars = value.chars();

    match (chars.next().and_then(Direction::from_symbol), chars.next()) {
        (Some(direction), None) => Ok(direction),
        _ => Err(TurtleError::UnknownDirection(value.to_string())),
    }
}
