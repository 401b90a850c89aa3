//! This module provides the `Loader` struct, responsible for reading settings and
//! sequence input from files or strings and handing the lines to the parsers.

use crate::sequence::parse_sequences;
use crate::settings::parse_settings;
use crate::types::{Limits, Sequences, Settings, TurtleError};
use std::fs;
use std::path::Path;

/// `Loader` is a utility struct for loading simulator input.
pub struct Loader;

impl Loader {
    /// Reads a file and splits it into lines.
    ///
    /// Both `\n` and `\r\n` line endings are accepted. A trailing newline does
    /// not produce an extra empty line.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` with the file's lines.
    /// * `Err(TurtleError::FileError)` if the file cannot be read.
    pub fn read_lines(path: &Path) -> Result<Vec<String>, TurtleError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TurtleError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }

    /// Loads and validates a settings file.
    ///
    /// # Arguments
    ///
    /// * `path` - The settings file to read.
    /// * `limits` - Upper bound for the board dimensions.
    pub fn load_settings(path: &Path, limits: &Limits) -> Result<Settings, TurtleError> {
        parse_settings(&Self::read_lines(path)?, limits)
    }

    /// Loads and validates a sequence file.
    pub fn load_sequences(path: &Path) -> Result<Sequences, TurtleError> {
        parse_sequences(&Self::read_lines(path)?)
    }

    /// Parses settings from in-memory text.
    pub fn settings_from_string(content: &str, limits: &Limits) -> Result<Settings, TurtleError> {
        let lines: Vec<&str> = content.lines().collect();
        parse_settings(&lines, limits)
    }

    /// Parses sequences from in-memory text.
    pub fn sequences_from_string(content: &str) -> Result<Sequences, TurtleError> {
        let lines: Vec<&str> = content.lines().collect();
        parse_sequences(&lines)
    }
}
