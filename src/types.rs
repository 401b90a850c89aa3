//! This module defines the core data structures and types used throughout the turtle
//! simulator, including the board configuration, the move model, simulation outcomes
//! and error types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::Rule;

/// The default upper bound for either board dimension.
pub const DEFAULT_MAX_BOARD_SIZE: u32 = 10_000;

/// Parsing limits applied while reading a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// The largest accepted number of columns or rows.
    pub max_board_size: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_board_size: DEFAULT_MAX_BOARD_SIZE,
        }
    }
}

/// Dimensions of the board. Both values are greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub columns: u32,
    pub rows: u32,
}

impl BoardSize {
    /// Converts a working position into a board coordinate.
    ///
    /// Returns `None` when the position lies outside `[0, columns) x [0, rows)`.
    pub fn locate(&self, position: Position) -> Option<Coordinate> {
        let column = u32::try_from(position.column).ok()?;
        let row = u32::try_from(position.row).ok()?;

        (column < self.columns && row < self.rows).then_some(Coordinate { column, row })
    }
}

/// A cell on the board. Always inside the board it was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub column: u32,
    pub row: u32,
}

impl Coordinate {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The turtle's working position during a simulation.
///
/// Unlike [`Coordinate`] the components are signed and unbounded, so a move off
/// the board produces a representable position that can then be judged out of
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: i64,
    pub row: i64,
}

impl Position {
    /// Returns the position one cell away in the given direction.
    pub fn advance(self, facing: Direction) -> Self {
        let (dc, dr) = facing.offset();
        Self {
            column: self.column + dc,
            row: self.row + dr,
        }
    }
}

impl From<Coordinate> for Position {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            column: i64::from(coordinate.column),
            row: i64::from(coordinate.row),
        }
    }
}

/// The direction the turtle is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Turns the turtle one step clockwise: North, East, South, West, North.
    pub fn rotate(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Maps a settings file direction symbol (`N`, `E`, `S`, `W`) to a direction.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// Column and row deltas of a single advance. North decreases the row.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Where the turtle starts and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurtleStart {
    pub position: Coordinate,
    pub facing: Direction,
}

/// A validated board configuration.
///
/// The exit and every mine lie inside `board`. Start, exit and mines are not
/// checked against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub board: BoardSize,
    pub start: TurtleStart,
    pub exit: Coordinate,
    pub mines: HashSet<Coordinate>,
}

impl Settings {
    pub fn is_mine(&self, coordinate: &Coordinate) -> bool {
        self.mines.contains(coordinate)
    }

    pub fn is_exit(&self, coordinate: &Coordinate) -> bool {
        self.exit == *coordinate
    }
}

/// A single scripted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move one cell forward (`m`).
    Advance,
    /// Turn 90 degrees clockwise (`r`).
    Rotate,
}

/// All move sequences read from a sequence file, in file order.
///
/// Every sequence is non-empty and is simulated independently of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences(Vec<Vec<Move>>);

impl Sequences {
    pub fn new(sequences: Vec<Vec<Move>>) -> Self {
        Self(sequences)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[Move]> {
        self.0.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Move]> {
        self.0.iter().map(Vec::as_slice)
    }
}

/// The terminal result of simulating one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The turtle reached the exit.
    Success,
    /// The turtle stepped on a mine.
    MineHit,
    /// The turtle moved off the board.
    OutOfBounds,
    /// The moves ran out before anything else happened.
    StillInDanger,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Success => "Success",
            Outcome::MineHit => "Mine Hit",
            Outcome::OutOfBounds => "Out of Bounds",
            Outcome::StillInDanger => "Still in Danger",
        };
        f.write_str(label)
    }
}

/// Represents the outcome of a single simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The move was applied and nothing was triggered.
    Continue,
    /// The simulation is over.
    Halt(Outcome),
}

/// The result of one sequence, numbered from 1 in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub sequence: usize,
    pub outcome: Outcome,
}

impl fmt::Display for SequenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence {}: {}", self.sequence, self.outcome)
    }
}

/// Identifies which settings line a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    BoardSize,
    Start,
    Exit,
    /// A mine, with its 1-based line number.
    Mine(usize),
}

impl Record {
    /// Number of comma separated fields the record must have.
    pub fn arity(self) -> usize {
        match self {
            Record::Start => 3,
            Record::BoardSize | Record::Exit | Record::Mine(_) => 2,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::BoardSize => f.write_str("board size"),
            Record::Start => f.write_str("turtle start"),
            Record::Exit => f.write_str("exit"),
            Record::Mine(line) => write!(f, "mine on line {}", line),
        }
    }
}

/// Broad classification of a [`TurtleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing lines or a wrong number of fields.
    Structural,
    /// A number that does not parse or falls outside its allowed range.
    Range,
    /// A symbol outside its alphabet, or a duplicated mine.
    Domain,
    /// The line grammar itself rejected the input.
    Syntax,
    /// Reading an input file failed.
    File,
}

/// Represents the errors that can occur while loading and parsing simulator input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TurtleError {
    /// The settings input has fewer than the three mandatory lines.
    #[error("Not enough lines in settings ({0} found): settings must define board size, start, and exit")]
    MissingLines(usize),
    /// A settings line has the wrong number of comma separated fields.
    #[error("Invalid {record} definition: expected {expected} fields, found {found}")]
    FieldCount {
        record: Record,
        expected: usize,
        found: usize,
    },
    /// A numeric field failed to parse or is outside `min..=max`.
    #[error("Invalid {record} {field} value '{value}': expected an integer between {min} and {max}")]
    OutOfRange {
        record: Record,
        field: &'static str,
        value: String,
        min: u32,
        max: u32,
    },
    /// The start direction is not one of `N`, `E`, `S`, `W`.
    #[error("Invalid turtle start direction '{0}': expected one of N, E, S, W")]
    UnknownDirection(String),
    /// The same mine coordinate appears more than once.
    #[error("Duplicate mine {coordinate} on line {line}")]
    DuplicateMine { coordinate: Coordinate, line: usize },
    /// The sequence input has no lines at all.
    #[error("No sequences found")]
    NoSequences,
    /// A sequence line is blank.
    #[error("Empty sequences are not allowed (line {0})")]
    EmptySequence(usize),
    /// A sequence contains a character other than `m` or `r`.
    #[error("Invalid move symbol '{symbol}' on line {line}, column {column}: expected 'm' or 'r'")]
    UnknownMove {
        symbol: char,
        line: usize,
        column: usize,
    },
    /// The line grammar rejected the input.
    #[error("Syntax error: {0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates an error reading an input file.
    #[error("File error: {0}")]
    FileError(String),
}

impl TurtleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TurtleError::MissingLines(_)
            | TurtleError::FieldCount { .. }
            | TurtleError::NoSequences
            | TurtleError::EmptySequence(_) => ErrorKind::Structural,
            TurtleError::OutOfRange { .. } => ErrorKind::Range,
            TurtleError::UnknownDirection(_)
            | TurtleError::DuplicateMine { .. }
            | TurtleError::UnknownMove { .. } => ErrorKind::Domain,
            TurtleError::Syntax(_) => ErrorKind::Syntax,
            TurtleError::FileError(_) => ErrorKind::File,
        }
    }
}
