//! This crate provides the core logic for a turtle minefield simulator.
//! It includes modules for parsing board settings and move sequences, loading them
//! from files, and simulating each sequence to a terminal outcome.

pub mod loader;
pub mod parser;
pub mod sequence;
pub mod settings;
pub mod simulator;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `Loader` struct from the loader module.
pub use loader::Loader;
/// Re-exports the `parse_sequences` function from the sequence module.
pub use sequence::parse_sequences;
/// Re-exports the `parse_settings` function from the settings module.
pub use settings::parse_settings;
/// Re-exports the simulation engine and its convenience functions.
pub use simulator::{report, simulate, simulate_all, Simulator};
/// Re-exports the board, move and outcome types from the types module.
pub use types::{
    BoardSize, Coordinate, Direction, ErrorKind, Limits, Move, Outcome, Position, Record,
    SequenceReport, Sequences, Settings, Step, TurtleError, TurtleStart, DEFAULT_MAX_BOARD_SIZE,
};
