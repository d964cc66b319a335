//! Semantic validation of extracted boards
//!
//! Re-evaluates every rule and the bingo invariant directly over the board,
//! without going through the SAT encoding, so a bad model or a bad encoding
//! cannot slip through extraction unnoticed.

use crate::puzzle::{Board, Puzzle, Rule, GRID_SIZE};
use crate::sat::encoder::{
    anti_diagonal, main_diagonal, neighbors, orthogonal_neighbors, NEIGHBOR_COUNT_BOUND,
};

/// Result of validating a board against a puzzle
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<String>,
}

/// Checks a concrete board against a puzzle's rules
pub struct SolutionValidator;

impl SolutionValidator {
    /// Validate the board against every cell rule and the bingo invariant
    pub fn validate(puzzle: &Puzzle, board: &Board) -> ValidationReport {
        let mut violations = Vec::new();

        for (row, col, rule) in puzzle.cells() {
            if !Self::rule_holds(board, row, col, rule) {
                violations.push(format!("rule '{}' violated at ({}, {})", rule, row, col));
            }
        }

        if !board.has_bingo() {
            violations.push("no fully marked row, column, or diagonal".to_string());
        }

        ValidationReport {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    fn marked_count(board: &Board, positions: &[(usize, usize)]) -> usize {
        positions.iter().filter(|&&(r, c)| board.get(r, c)).count()
    }

    /// Whether one cell's rule holds on the board.
    ///
    /// The count bounds mirror the encoder exactly: parity counts are
    /// enumerated below [`NEIGHBOR_COUNT_BOUND`], so a cell with all eight
    /// neighbors marked fails `orange`; the matching-count rules enumerate
    /// below GRID_SIZE, so two fully marked lines fail `green`/`yellow`.
    pub fn rule_holds(board: &Board, row: usize, col: usize, rule: Rule) -> bool {
        match rule {
            Rule::Black => board.get(row, col),
            Rule::Red => Self::marked_count(board, &neighbors(row, col)) >= 1,
            Rule::Blue => Self::marked_count(board, &neighbors(row, col)) <= 2,
            Rule::Pink => {
                !board.get(row, col)
                    || Self::marked_count(board, &orthogonal_neighbors(row, col)) == 0
            }
            Rule::Orange => {
                let count = Self::marked_count(board, &neighbors(row, col));
                count % 2 == 0 && count < NEIGHBOR_COUNT_BOUND
            }
            Rule::Purple => {
                let count = Self::marked_count(board, &neighbors(row, col));
                count % 2 == 1
            }
            Rule::Green => {
                let row_positions: Vec<_> = (0..GRID_SIZE).map(|j| (row, j)).collect();
                let col_positions: Vec<_> = (0..GRID_SIZE).map(|i| (i, col)).collect();
                let row_count = Self::marked_count(board, &row_positions);
                let col_count = Self::marked_count(board, &col_positions);
                row_count == col_count && row_count < GRID_SIZE
            }
            Rule::Yellow => {
                let main_count = Self::marked_count(board, &main_diagonal(row, col));
                let anti_count = Self::marked_count(board, &anti_diagonal(row, col));
                main_count == anti_count && main_count < GRID_SIZE
            }
            Rule::Empty => true,
        }
    }
}
