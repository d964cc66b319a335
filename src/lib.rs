//! Bingo Puzzle SAT Solver
//!
//! This library encodes 5x5 color-rule bingo puzzles as boolean satisfiability
//! problems, solves them with CaDiCaL, and extracts a marked board that
//! satisfies every cell rule and completes at least one bingo line.

pub mod config;
pub mod error;
pub mod puzzle;
pub mod sat;
pub mod solve;
pub mod utils;

pub use config::Settings;
pub use error::PuzzleError;
pub use puzzle::{Board, Puzzle, Rule, GRID_SIZE};
pub use solve::{BingoProblem, SolveOutcome, SolveReport};

/// Main entry point for solving bingo puzzles
pub fn solve_puzzle(puzzle: Puzzle) -> Result<SolveReport, PuzzleError> {
    BingoProblem::new(puzzle).solve()
}
