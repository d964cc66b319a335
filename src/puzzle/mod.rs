//! Puzzle domain types: rules, the rule grid, and the output board

pub mod grid;
pub mod io;
pub mod rule;

pub use grid::{Board, Puzzle, CELL_COUNT, GRID_SIZE};
pub use io::{load_puzzle_from_file, parse_puzzle_from_yaml, puzzle_to_yaml, save_puzzle_to_file};
pub use rule::Rule;
