//! Puzzle and board grids

use super::Rule;
use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the puzzle grid
pub const GRID_SIZE: usize = 5;

/// Number of cells in the puzzle grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A 5x5 matrix of rule tokens, one per cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    rules: [[Rule; GRID_SIZE]; GRID_SIZE],
}

impl Puzzle {
    /// Create a puzzle where every cell has the same rule
    pub fn uniform(rule: Rule) -> Self {
        Self {
            rules: [[rule; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parse a puzzle from 25 row-major rule tokens
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PuzzleError> {
        if tokens.len() != CELL_COUNT {
            return Err(PuzzleError::TokenCount {
                expected: CELL_COUNT,
                found: tokens.len(),
            });
        }

        let mut rules = [[Rule::Empty; GRID_SIZE]; GRID_SIZE];
        for (index, token) in tokens.iter().enumerate() {
            rules[index / GRID_SIZE][index % GRID_SIZE] = token.as_ref().parse()?;
        }
        Ok(Self { rules })
    }

    /// Build a puzzle from parsed rows, validating the 5x5 shape
    pub fn from_rows(rows: Vec<Vec<Rule>>) -> Result<Self, PuzzleError> {
        let found: usize = rows.iter().map(Vec::len).sum();
        if rows.len() != GRID_SIZE || rows.iter().any(|row| row.len() != GRID_SIZE) {
            return Err(PuzzleError::TokenCount {
                expected: CELL_COUNT,
                found,
            });
        }

        let mut rules = [[Rule::Empty; GRID_SIZE]; GRID_SIZE];
        for (row, row_rules) in rows.into_iter().enumerate() {
            for (col, rule) in row_rules.into_iter().enumerate() {
                rules[row][col] = rule;
            }
        }
        Ok(Self { rules })
    }

    /// Rule assigned to a cell
    pub fn get(&self, row: usize, col: usize) -> Rule {
        self.rules[row][col]
    }

    /// Set the rule of a single cell
    pub fn set(&mut self, row: usize, col: usize, rule: Rule) {
        self.rules[row][col] = rule;
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Rule)> + '_ {
        (0..GRID_SIZE).flat_map(move |row| {
            (0..GRID_SIZE).map(move |col| (row, col, self.rules[row][col]))
        })
    }

    /// The puzzle as rows of rules, for serialization
    pub fn rows(&self) -> Vec<Vec<Rule>> {
        self.rules.iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rules {
            let names: Vec<&str> = row.iter().map(|rule| rule.name()).collect();
            writeln!(f, "{}", names.join(" "))?;
        }
        Ok(())
    }
}

/// A 5x5 matrix of marks, the solver's witness assignment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create a board with no marks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit cells
    pub fn from_cells(cells: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Whether the cell is marked
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Mark or unmark a cell
    pub fn set(&mut self, row: usize, col: usize, marked: bool) -> Result<(), PuzzleError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(PuzzleError::OutOfBounds {
                row,
                col,
                size: GRID_SIZE,
            });
        }
        self.cells[row][col] = marked;
        Ok(())
    }

    /// Total number of marked cells
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell)
            .count()
    }

    /// Whether some row, column, or corner-to-corner diagonal is fully marked
    pub fn has_bingo(&self) -> bool {
        for i in 0..GRID_SIZE {
            if (0..GRID_SIZE).all(|j| self.cells[i][j]) {
                return true;
            }
            if (0..GRID_SIZE).all(|j| self.cells[j][i]) {
                return true;
            }
        }
        (0..GRID_SIZE).all(|i| self.cells[i][i])
            || (0..GRID_SIZE).all(|i| self.cells[i][GRID_SIZE - 1 - i])
    }

    /// The board as rows of booleans, for serialization
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let marks: Vec<&str> = row.iter().map(|&cell| if cell { "X" } else { "O" }).collect();
            writeln!(f, "{}", marks.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_from_tokens() {
        let tokens: Vec<&str> = std::iter::repeat("empty").take(24).chain(["black"]).collect();
        let puzzle = Puzzle::from_tokens(&tokens).unwrap();
        assert_eq!(puzzle.get(0, 0), Rule::Empty);
        assert_eq!(puzzle.get(4, 4), Rule::Black);
    }

    #[test]
    fn test_puzzle_wrong_token_count() {
        let tokens = vec!["empty"; 24];
        let err = Puzzle::from_tokens(&tokens).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::TokenCount {
                expected: 25,
                found: 24
            }
        ));
    }

    #[test]
    fn test_puzzle_bad_token() {
        let mut tokens = vec!["empty"; 25];
        tokens[7] = "chartreuse";
        assert!(matches!(
            Puzzle::from_tokens(&tokens),
            Err(PuzzleError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_puzzle_from_rows_shape() {
        let rows = vec![vec![Rule::Empty; 5]; 4];
        assert!(Puzzle::from_rows(rows).is_err());

        let mut rows = vec![vec![Rule::Empty; 5]; 5];
        rows[2].push(Rule::Red);
        assert!(Puzzle::from_rows(rows).is_err());

        let rows = vec![vec![Rule::Empty; 5]; 5];
        assert!(Puzzle::from_rows(rows).is_ok());
    }

    #[test]
    fn test_puzzle_cells_iteration() {
        let puzzle = Puzzle::uniform(Rule::Pink);
        let cells: Vec<_> = puzzle.cells().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!(cells[0], (0, 0, Rule::Pink));
        assert_eq!(cells[24], (4, 4, Rule::Pink));
    }

    #[test]
    fn test_board_marks() {
        let mut board = Board::new();
        assert_eq!(board.marked_count(), 0);

        board.set(2, 3, true).unwrap();
        assert!(board.get(2, 3));
        assert_eq!(board.marked_count(), 1);

        assert!(board.set(5, 0, true).is_err());
    }

    #[test]
    fn test_board_bingo_row_and_column() {
        let mut board = Board::new();
        assert!(!board.has_bingo());

        for col in 0..GRID_SIZE {
            board.set(1, col, true).unwrap();
        }
        assert!(board.has_bingo());

        let mut board = Board::new();
        for row in 0..GRID_SIZE {
            board.set(row, 3, true).unwrap();
        }
        assert!(board.has_bingo());
    }

    #[test]
    fn test_board_bingo_diagonals() {
        let mut board = Board::new();
        for i in 0..GRID_SIZE {
            board.set(i, i, true).unwrap();
        }
        assert!(board.has_bingo());

        let mut board = Board::new();
        for i in 0..GRID_SIZE {
            board.set(i, GRID_SIZE - 1 - i, true).unwrap();
        }
        assert!(board.has_bingo());
    }

    #[test]
    fn test_board_no_bingo_for_partial_line() {
        let mut board = Board::new();
        for col in 0..GRID_SIZE - 1 {
            board.set(0, col, true).unwrap();
        }
        assert!(!board.has_bingo());
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(0, 0, true).unwrap();
        board.set(0, 2, true).unwrap();

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), GRID_SIZE);
        assert_eq!(lines[0], "X O X O O");
        assert_eq!(lines[4], "O O O O O");
    }
}
