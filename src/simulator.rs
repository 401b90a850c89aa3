//! This module defines the `Simulator` struct, which replays a move sequence against a
//! board configuration. It tracks the turtle's working position and facing, applies one
//! move at a time and decides when the run is over.

use crate::types::{
    Direction, Move, Outcome, Position, SequenceReport, Sequences, Settings, Step,
};
use tracing::{debug, trace};

/// Replays a single move sequence against a [`Settings`].
///
/// The simulator borrows the settings, so the board configuration always outlives
/// every run made against it. Each simulator owns its own working state; nothing
/// is shared between sequences.
pub struct Simulator<'a> {
    settings: &'a Settings,
    moves: &'a [Move],
    position: Position,
    facing: Direction,
    cursor: usize,
    outcome: Option<Outcome>,
}

impl<'a> Simulator<'a> {
    /// Creates a new `Simulator` with the turtle at its start pose.
    ///
    /// # Arguments
    ///
    /// * `settings` - The validated board configuration.
    /// * `moves` - The moves to replay, in order.
    pub fn new(settings: &'a Settings, moves: &'a [Move]) -> Self {
        Self {
            settings,
            moves,
            position: settings.start.position.into(),
            facing: settings.start.facing,
            cursor: 0,
            outcome: None,
        }
    }

    /// Applies the next move and checks whether the run is over.
    ///
    /// After every move, rotations included, the checks run in a fixed order:
    /// off the board, then on a mine, then on the exit.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if the move was applied and nothing was triggered.
    /// * `Step::Halt(outcome)` once the run is over. Further calls return the same halt.
    pub fn step(&mut self) -> Step {
        if let Some(outcome) = self.outcome {
            return Step::Halt(outcome);
        }

        let Some(&next) = self.moves.get(self.cursor) else {
            return self.halt(Outcome::StillInDanger);
        };

        match next {
            Move::Advance => self.position = self.position.advance(self.facing),
            Move::Rotate => self.facing = self.facing.rotate(),
        }
        self.cursor += 1;

        trace!(
            step = self.cursor,
            column = self.position.column,
            row = self.position.row,
            facing = ?self.facing,
            "applied {:?}",
            next
        );

        match self.check() {
            Some(outcome) => self.halt(outcome),
            None => Step::Continue,
        }
    }

    /// Runs the sequence until it halts and returns the outcome.
    pub fn run(&mut self) -> Outcome {
        loop {
            if let Step::Halt(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Puts the turtle back at its start pose and rewinds the sequence.
    pub fn reset(&mut self) {
        self.position = self.settings.start.position.into();
        self.facing = self.settings.start.facing;
        self.cursor = 0;
        self.outcome = None;
    }

    /// Returns the turtle's current working position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the direction the turtle is currently facing.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Returns the number of moves applied so far.
    pub fn step_count(&self) -> usize {
        self.cursor
    }

    /// Returns the outcome if the run has halted.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Bounds come first so mine and exit lookups only ever see board coordinates.
    fn check(&self) -> Option<Outcome> {
        let Some(coordinate) = self.settings.board.locate(self.position) else {
            return Some(Outcome::OutOfBounds);
        };

        if self.settings.is_mine(&coordinate) {
            Some(Outcome::MineHit)
        } else if self.settings.is_exit(&coordinate) {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    fn halt(&mut self, outcome: Outcome) -> Step {
        debug!(steps = self.cursor, %outcome, "simulation halted");
        self.outcome = Some(outcome);
        Step::Halt(outcome)
    }
}

/// Simulates one sequence from the start pose.
pub fn simulate(settings: &Settings, moves: &[Move]) -> Outcome {
    Simulator::new(settings, moves).run()
}

/// Simulates every sequence independently, returning outcomes in sequence order.
pub fn simulate_all(settings: &Settings, sequences: &Sequences) -> Vec<Outcome> {
    sequences
        .iter()
        .map(|moves| simulate(settings, moves))
        .collect()
}

/// Simulates every sequence and numbers the results from 1.
pub fn report(settings: &Settings, sequences: &Sequences) -> Vec<SequenceReport> {
    simulate_all(settings, sequences)
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| SequenceReport {
            sequence: i + 1,
            outcome,
        })
        .collect()
}
