//! Error taxonomy for puzzle configuration and solver failures

use thiserror::Error;

/// Errors surfaced by the puzzle library.
///
/// An unsatisfiable or inconclusive solver verdict is not an error; those are
/// reported through [`crate::sat::Outcome`] and [`crate::solve::SolveOutcome`].
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// A rule token that is not one of the nine recognized names
    #[error("unrecognized rule name '{0}'")]
    UnknownRule(String),

    /// Wrong number of rule tokens for a 5x5 puzzle
    #[error("expected {expected} rule tokens, got {found}")]
    TokenCount { expected: usize, found: usize },

    /// A cell coordinate outside the grid
    #[error("cell ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// A puzzle file that could not be read or parsed
    #[error("puzzle file error: {0}")]
    PuzzleFile(String),

    /// A settings file that could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// A report that could not be written
    #[error("output error: {0}")]
    Output(String),

    /// The satisfiability backend failed
    #[error("satisfiability engine error: {0}")]
    Engine(String),
}

impl PuzzleError {
    /// Whether this error is a configuration problem (malformed input) as
    /// opposed to a backend or output failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PuzzleError::UnknownRule(_)
                | PuzzleError::TokenCount { .. }
                | PuzzleError::OutOfBounds { .. }
                | PuzzleError::PuzzleFile(_)
                | PuzzleError::Config(_)
        )
    }
}
