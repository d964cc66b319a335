//! Problem driver: encode, solve, extract, validate

pub mod problem;
pub mod report;
pub mod validator;

pub use problem::BingoProblem;
pub use report::{SolveOutcome, SolveReport};
pub use validator::{SolutionValidator, ValidationReport};
