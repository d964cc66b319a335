//! The bingo puzzle solve pipeline

use super::{SolutionValidator, SolveOutcome, SolveReport};
use crate::error::PuzzleError;
use crate::puzzle::{Board, Puzzle, GRID_SIZE};
use crate::sat::{Model, Outcome, PuzzleEncoder, SatSolver};
use std::time::Instant;

/// One puzzle plus the machinery to solve it.
///
/// Each solve builds a fresh encoder and engine; nothing is shared across
/// solves, so concurrent solves of different puzzles are independent.
pub struct BingoProblem {
    puzzle: Puzzle,
}

impl BingoProblem {
    pub fn new(puzzle: Puzzle) -> Self {
        Self { puzzle }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Encode the puzzle, run the engine once, and extract the witness.
    ///
    /// A satisfying model is re-checked against the puzzle semantics before
    /// it is reported; a model that fails that check is an engine error.
    pub fn solve(&self) -> Result<SolveReport, PuzzleError> {
        let start = Instant::now();

        let mut encoder = PuzzleEncoder::new();
        let clauses = encoder.encode(&self.puzzle)?;
        let statistics = encoder.statistics(clauses.len());

        let mut solver = SatSolver::new();
        solver.add_clauses(&clauses)?;

        let outcome = match solver.solve()? {
            Outcome::Satisfiable(model) => {
                let board = extract_board(&mut encoder, &model)?;

                let validation = SolutionValidator::validate(&self.puzzle, &board);
                if !validation.is_valid {
                    return Err(PuzzleError::Engine(format!(
                        "model failed semantic validation: {}",
                        validation.violations.join("; ")
                    )));
                }
                SolveOutcome::Solved(board)
            }
            Outcome::Unsatisfiable => SolveOutcome::Unsatisfiable,
            Outcome::Unknown => SolveOutcome::Inconclusive,
        };

        Ok(SolveReport {
            outcome,
            statistics,
            solve_time: start.elapsed(),
        })
    }
}

/// Read each cell variable's truth value out of the model
fn extract_board(encoder: &mut PuzzleEncoder, model: &Model) -> Result<Board, PuzzleError> {
    let mut board = Board::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let variable = encoder.cell_variable(row, col)?;
            board.set(row, col, model.value(variable))?;
        }
    }
    Ok(board)
}
