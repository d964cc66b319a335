//! SAT encoding and solving components

pub mod encoder;
pub mod formula;
pub mod solver;
pub mod variables;

pub use encoder::{EncodingStatistics, PuzzleEncoder};
pub use formula::{Clause, Formula, NodeId};
pub use solver::{CadicalEngine, Model, Outcome, SatEngine, SatSolver, Verdict};
pub use variables::VariableManager;
