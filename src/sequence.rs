//! Parses move sequence files: one sequence of `m` (advance) and `r` (rotate)
//! symbols per line.

use crate::{
    parser::parse_moves,
    types::{Sequences, TurtleError},
};
use tracing::debug;

/// Parses sequence lines into [`Sequences`], keeping file order.
///
/// Each line is trimmed before parsing. Blank lines are rejected rather than
/// skipped, and the first invalid line aborts the whole parse.
pub fn parse_sequences<S: AsRef<str>>(lines: &[S]) -> Result<Sequences, TurtleError> {
    if lines.is_empty() {
        return Err(TurtleError::NoSequences);
    }

    let sequences = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.as_ref().trim();
            if line.is_empty() {
                return Err(TurtleError::EmptySequence(i + 1));
            }
            parse_moves(line, i + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = sequences.len(), "parsed sequences");

    Ok(Sequences::new(sequences))
}
