//! Rule encoding and formula composition
//!
//! Turns a puzzle into one conjunctive formula: a predicate per cell rule
//! plus the global bingo predicate, then lowers the formula to CNF clauses
//! for the engine.

use super::formula::{Clause, Formula, NodeId};
use super::variables::VariableManager;
use crate::error::PuzzleError;
use crate::puzzle::{Puzzle, Rule, CELL_COUNT, GRID_SIZE};
use serde::Serialize;
use std::fmt;

/// Upper bound (exclusive) for the parity rules' count enumeration.
///
/// The bound is fixed rather than derived from the neighbor set: a cell with
/// all eight neighbors marked never satisfies `orange`, and corner or edge
/// cells simply get vacuous disjuncts for counts they cannot reach.
pub(crate) const NEIGHBOR_COUNT_BOUND: usize = 8;

fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < GRID_SIZE as isize && col >= 0 && col < GRID_SIZE as isize
}

/// The up-to-8 cells adjacent to a position, bounds-filtered, no wraparound
pub fn neighbors(row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(8);
    for delta_row in -1..=1isize {
        for delta_col in -1..=1isize {
            if delta_row == 0 && delta_col == 0 {
                continue;
            }
            let r = row as isize + delta_row;
            let c = col as isize + delta_col;
            if in_bounds(r, c) {
                positions.push((r as usize, c as usize));
            }
        }
    }
    positions
}

/// The up/down/left/right cells adjacent to a position, bounds-filtered
pub fn orthogonal_neighbors(row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(4);
    for (delta_row, delta_col) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
        let r = row as isize + delta_row;
        let c = col as isize + delta_col;
        if in_bounds(r, c) {
            positions.push((r as usize, c as usize));
        }
    }
    positions
}

/// The full in-bounds main diagonal through a position (top-left to
/// bottom-right), including the position itself
pub fn main_diagonal(row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(GRID_SIZE);
    for k in -(GRID_SIZE as isize)..GRID_SIZE as isize {
        let r = row as isize + k;
        let c = col as isize + k;
        if in_bounds(r, c) {
            positions.push((r as usize, c as usize));
        }
    }
    positions
}

/// The full in-bounds anti-diagonal through a position (top-right to
/// bottom-left), including the position itself
pub fn anti_diagonal(row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(GRID_SIZE);
    for k in -(GRID_SIZE as isize)..GRID_SIZE as isize {
        let r = row as isize + k;
        let c = col as isize - k;
        if in_bounds(r, c) {
            positions.push((r as usize, c as usize));
        }
    }
    positions
}

/// Encodes a puzzle into clauses over one grid of decision variables.
///
/// One encoder instance serves one solve: the formula and the variable
/// numbering are built fresh per puzzle.
pub struct PuzzleEncoder {
    variables: VariableManager,
    formula: Formula,
}

impl PuzzleEncoder {
    pub fn new() -> Self {
        Self {
            variables: VariableManager::new(GRID_SIZE),
            formula: Formula::new(),
        }
    }

    /// Variable id of a grid cell, for model extraction
    pub fn cell_variable(&mut self, row: usize, col: usize) -> Result<i32, PuzzleError> {
        self.variables.cell_variable(row, col)
    }

    fn position_variables(
        &mut self,
        positions: &[(usize, usize)],
    ) -> Result<Vec<i32>, PuzzleError> {
        positions
            .iter()
            .map(|&(row, col)| self.variables.cell_variable(row, col))
            .collect()
    }

    fn row_variables(&mut self, row: usize) -> Result<Vec<i32>, PuzzleError> {
        let positions: Vec<_> = (0..GRID_SIZE).map(|col| (row, col)).collect();
        self.position_variables(&positions)
    }

    fn column_variables(&mut self, col: usize) -> Result<Vec<i32>, PuzzleError> {
        let positions: Vec<_> = (0..GRID_SIZE).map(|row| (row, col)).collect();
        self.position_variables(&positions)
    }

    /// Encode one cell's rule as a predicate over the grid variables
    pub fn encode_rule(&mut self, row: usize, col: usize, rule: Rule) -> Result<NodeId, PuzzleError> {
        match rule {
            Rule::Black => {
                let cell = self.cell_variable(row, col)?;
                Ok(self.formula.var(cell))
            }
            Rule::Red => {
                let vars = self.position_variables(&neighbors(row, col))?;
                let leaves = vars.iter().map(|&v| self.formula.var(v)).collect();
                Ok(self.formula.or(leaves))
            }
            Rule::Blue => {
                let vars = self.position_variables(&neighbors(row, col))?;
                Ok(self.formula.at_most(&vars, 2))
            }
            Rule::Pink => {
                let cell = self.cell_variable(row, col)?;
                let orthogonal = self.position_variables(&orthogonal_neighbors(row, col))?;

                let cell_leaf = self.formula.var(cell);
                let unmarked = self.formula.not(cell_leaf);
                let mut neighbors_off = Vec::with_capacity(orthogonal.len());
                for variable in orthogonal {
                    let leaf = self.formula.var(variable);
                    neighbors_off.push(self.formula.not(leaf));
                }
                let all_off = self.formula.and(neighbors_off);
                Ok(self.formula.or(vec![unmarked, all_off]))
            }
            Rule::Orange => {
                let vars = self.position_variables(&neighbors(row, col))?;
                Ok(self.parity_count(&vars, 0))
            }
            Rule::Purple => {
                let vars = self.position_variables(&neighbors(row, col))?;
                Ok(self.parity_count(&vars, 1))
            }
            Rule::Green => {
                let row_vars = self.row_variables(row)?;
                let col_vars = self.column_variables(col)?;
                Ok(self.matching_counts(&row_vars, &col_vars))
            }
            Rule::Yellow => {
                let main_vars = self.position_variables(&main_diagonal(row, col))?;
                let anti_vars = self.position_variables(&anti_diagonal(row, col))?;
                Ok(self.matching_counts(&main_vars, &anti_vars))
            }
            Rule::Empty => Ok(self.formula.always_true()),
        }
    }

    /// Disjunction over counts below [`NEIGHBOR_COUNT_BOUND`] with the given
    /// parity remainder
    fn parity_count(&mut self, variables: &[i32], remainder: usize) -> NodeId {
        let mut disjuncts = Vec::new();
        for count in 0..NEIGHBOR_COUNT_BOUND {
            if count % 2 == remainder {
                disjuncts.push(self.formula.exactly(variables, count));
            }
        }
        self.formula.or(disjuncts)
    }

    /// Some count n in 0..GRID_SIZE holds exactly in both variable sets
    fn matching_counts(&mut self, first: &[i32], second: &[i32]) -> NodeId {
        let mut disjuncts = Vec::with_capacity(GRID_SIZE);
        for count in 0..GRID_SIZE {
            let in_first = self.formula.exactly(first, count);
            let in_second = self.formula.exactly(second, count);
            disjuncts.push(self.formula.and(vec![in_first, in_second]));
        }
        self.formula.or(disjuncts)
    }

    fn all_marked(&mut self, variables: &[i32]) -> NodeId {
        let leaves = variables.iter().map(|&v| self.formula.var(v)).collect();
        self.formula.and(leaves)
    }

    /// The global predicate: some row, column, or corner-to-corner diagonal
    /// is fully marked, as a disjunction of 12 conjunctions
    pub fn bingo(&mut self) -> Result<NodeId, PuzzleError> {
        let mut lines = Vec::with_capacity(2 * GRID_SIZE + 2);

        for i in 0..GRID_SIZE {
            let row_vars = self.row_variables(i)?;
            lines.push(self.all_marked(&row_vars));
            let col_vars = self.column_variables(i)?;
            lines.push(self.all_marked(&col_vars));
        }

        let main: Vec<_> = (0..GRID_SIZE).map(|i| (i, i)).collect();
        let main_vars = self.position_variables(&main)?;
        lines.push(self.all_marked(&main_vars));

        let anti: Vec<_> = (0..GRID_SIZE).map(|i| (i, GRID_SIZE - 1 - i)).collect();
        let anti_vars = self.position_variables(&anti)?;
        lines.push(self.all_marked(&anti_vars));

        Ok(self.formula.or(lines))
    }

    /// Conjoin all 25 cell predicates with the bingo predicate
    pub fn compose(&mut self, puzzle: &Puzzle) -> Result<NodeId, PuzzleError> {
        let mut conjuncts = Vec::with_capacity(CELL_COUNT + 1);
        for (row, col, rule) in puzzle.cells() {
            conjuncts.push(self.encode_rule(row, col, rule)?);
        }
        let bingo = self.bingo()?;
        conjuncts.push(bingo);
        Ok(self.formula.and(conjuncts))
    }

    /// Compose the puzzle and lower the formula to CNF
    pub fn encode(&mut self, puzzle: &Puzzle) -> Result<Vec<Clause>, PuzzleError> {
        let root = self.compose(puzzle)?;
        Ok(self.formula.to_clauses(root, &mut self.variables))
    }

    /// Encoding statistics for a produced clause set
    pub fn statistics(&self, clause_count: usize) -> EncodingStatistics {
        EncodingStatistics {
            variables: self.variables.variable_count(),
            clauses: clause_count,
            nodes: self.formula.node_count(),
        }
    }
}

impl Default for PuzzleEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about one puzzle encoding
#[derive(Debug, Clone, Serialize)]
pub struct EncodingStatistics {
    pub variables: usize,
    pub clauses: usize,
    pub nodes: usize,
}

impl fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Encoding Statistics:")?;
        writeln!(f, "  Variables: {}", self.variables)?;
        writeln!(f, "  Clauses: {}", self.clauses)?;
        writeln!(f, "  Formula nodes: {}", self.nodes)?;
        Ok(())
    }
}
