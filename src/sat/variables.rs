//! Variable management for the SAT encoding

use crate::error::PuzzleError;
use std::collections::HashMap;

/// A grid cell's decision variable, keyed by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellVariable {
    pub row: usize,
    pub col: usize,
}

/// Maps grid cells to DIMACS variable ids and hands out auxiliary variables
/// for the CNF transform.
///
/// Cell variables are created on first use and keep their id for the lifetime
/// of one encoding; auxiliary variables share the same counter, so ids never
/// collide.
#[derive(Debug)]
pub struct VariableManager {
    variable_map: HashMap<CellVariable, i32>,
    next_id: i32,
    size: usize,
    auxiliary_count: usize,
}

impl VariableManager {
    /// Create a manager for a size x size grid
    pub fn new(size: usize) -> Self {
        Self {
            variable_map: HashMap::new(),
            next_id: 1, // DIMACS variables start from 1
            size,
            auxiliary_count: 0,
        }
    }

    /// Get or create the variable id for a cell
    pub fn cell_variable(&mut self, row: usize, col: usize) -> Result<i32, PuzzleError> {
        if row >= self.size || col >= self.size {
            return Err(PuzzleError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }

        let key = CellVariable { row, col };
        if let Some(&id) = self.variable_map.get(&key) {
            return Ok(id);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.variable_map.insert(key, id);
        Ok(id)
    }

    /// Allocate a fresh auxiliary variable
    pub fn fresh_variable(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        self.auxiliary_count += 1;
        id
    }

    /// All cell variables in row-major order
    pub fn cell_variables(&mut self) -> Result<Vec<i32>, PuzzleError> {
        let mut variables = Vec::with_capacity(self.size * self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                variables.push(self.cell_variable(row, col)?);
            }
        }
        Ok(variables)
    }

    /// Total number of variables created so far
    pub fn variable_count(&self) -> usize {
        (self.next_id - 1) as usize
    }

    /// Number of cell variables created so far
    pub fn cell_count(&self) -> usize {
        self.variable_map.len()
    }

    /// Number of auxiliary variables created so far
    pub fn auxiliary_count(&self) -> usize {
        self.auxiliary_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GRID_SIZE;

    #[test]
    fn test_cell_variables_are_stable() {
        let mut vm = VariableManager::new(GRID_SIZE);

        let a = vm.cell_variable(0, 0).unwrap();
        let b = vm.cell_variable(3, 2).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);

        // Same cell yields the same id
        assert_eq!(vm.cell_variable(0, 0).unwrap(), a);
        assert_eq!(vm.cell_variable(3, 2).unwrap(), b);
    }

    #[test]
    fn test_row_major_enumeration() {
        let mut vm = VariableManager::new(GRID_SIZE);
        let vars = vm.cell_variables().unwrap();

        assert_eq!(vars.len(), GRID_SIZE * GRID_SIZE);
        assert_eq!(vars, (1..=25).collect::<Vec<i32>>());
        assert_eq!(vm.cell_count(), 25);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut vm = VariableManager::new(GRID_SIZE);
        assert!(vm.cell_variable(4, 4).is_ok());
        assert!(matches!(
            vm.cell_variable(5, 0),
            Err(PuzzleError::OutOfBounds { .. })
        ));
        assert!(vm.cell_variable(0, 5).is_err());
    }

    #[test]
    fn test_auxiliary_variables_do_not_collide() {
        let mut vm = VariableManager::new(GRID_SIZE);
        vm.cell_variables().unwrap();

        let aux = vm.fresh_variable();
        assert_eq!(aux, 26);
        assert_eq!(vm.fresh_variable(), 27);
        assert_eq!(vm.auxiliary_count(), 2);
        assert_eq!(vm.variable_count(), 27);
    }
}
