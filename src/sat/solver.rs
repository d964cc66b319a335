//! Satisfiability engine abstraction and solver driver
//!
//! The encoder is engine-agnostic: it talks to anything implementing
//! [`SatEngine`]. The production engine is CaDiCaL; tests use stub engines.

use super::formula::Clause;
use crate::error::PuzzleError;
use cadical::Solver;
use std::collections::HashMap;

/// Verdict of one satisfiability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable,
    Unsatisfiable,
    /// The engine could not decide, e.g. resource exhaustion
    Unknown,
}

/// Minimal capability interface of a satisfiability backend: assert a
/// clause, check, read a value from the satisfying model.
pub trait SatEngine {
    fn add_clause(&mut self, literals: &[i32]);
    fn check(&mut self) -> Verdict;
    fn value(&self, variable: i32) -> Option<bool>;
}

/// CaDiCaL-backed engine
pub struct CadicalEngine {
    solver: Solver,
}

impl CadicalEngine {
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
        }
    }
}

impl Default for CadicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SatEngine for CadicalEngine {
    fn add_clause(&mut self, literals: &[i32]) {
        self.solver.add_clause(literals.iter().copied());
    }

    fn check(&mut self) -> Verdict {
        match self.solver.solve() {
            Some(true) => Verdict::Satisfiable,
            Some(false) => Verdict::Unsatisfiable,
            None => Verdict::Unknown,
        }
    }

    fn value(&self, variable: i32) -> Option<bool> {
        self.solver.value(variable)
    }
}

/// A total assignment extracted from a satisfying model
#[derive(Debug, Clone)]
pub struct Model {
    assignment: HashMap<i32, bool>,
}

impl Model {
    /// Truth value of a variable; variables the engine left unassigned read
    /// as false
    pub fn value(&self, variable: i32) -> bool {
        self.assignment.get(&variable).copied().unwrap_or(false)
    }

    /// Number of assigned variables
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Whether the model assigns no variables
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }
}

/// Outcome of one solve: a witness model, a proof of no witness, or an
/// inconclusive engine verdict. Unsatisfiable is an expected result, not an
/// error.
#[derive(Debug, Clone)]
pub enum Outcome {
    Satisfiable(Model),
    Unsatisfiable,
    Unknown,
}

/// Drives a [`SatEngine`] over a clause set and extracts the model
pub struct SatSolver<E: SatEngine = CadicalEngine> {
    engine: E,
    variable_count: usize,
    clause_count: usize,
}

impl SatSolver<CadicalEngine> {
    /// Create a solver over a fresh CaDiCaL engine
    pub fn new() -> Self {
        Self::with_engine(CadicalEngine::new())
    }
}

impl Default for SatSolver<CadicalEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SatEngine> SatSolver<E> {
    /// Create a solver over an explicit engine
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            variable_count: 0,
            clause_count: 0,
        }
    }

    /// Add clauses to the engine
    pub fn add_clauses(&mut self, clauses: &[Clause]) -> Result<(), PuzzleError> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Add a single clause to the engine
    pub fn add_clause(&mut self, clause: &Clause) -> Result<(), PuzzleError> {
        if clause.is_empty() {
            return Err(PuzzleError::Engine(
                "cannot assert an empty clause".to_string(),
            ));
        }

        for &literal in &clause.literals {
            let variable = literal.unsigned_abs() as usize;
            if variable > self.variable_count {
                self.variable_count = variable;
            }
        }

        self.engine.add_clause(&clause.literals);
        self.clause_count += 1;
        Ok(())
    }

    /// Run one satisfiability check
    pub fn solve(&mut self) -> Result<Outcome, PuzzleError> {
        match self.engine.check() {
            Verdict::Satisfiable => Ok(Outcome::Satisfiable(self.extract_model())),
            Verdict::Unsatisfiable => Ok(Outcome::Unsatisfiable),
            Verdict::Unknown => Ok(Outcome::Unknown),
        }
    }

    fn extract_model(&self) -> Model {
        let mut assignment = HashMap::new();
        for variable in 1..=self.variable_count as i32 {
            if let Some(value) = self.engine.value(variable) {
                assignment.insert(variable, value);
            }
        }
        Model { assignment }
    }

    /// Highest variable id seen in asserted clauses
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Number of clauses asserted
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine that returns a canned verdict and assignment
    struct StubEngine {
        verdict: Verdict,
        values: HashMap<i32, bool>,
    }

    impl SatEngine for StubEngine {
        fn add_clause(&mut self, _literals: &[i32]) {}

        fn check(&mut self) -> Verdict {
            self.verdict
        }

        fn value(&self, variable: i32) -> Option<bool> {
            self.values.get(&variable).copied()
        }
    }

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = SatSolver::new();
        solver.add_clause(&Clause::new(vec![1, 2])).unwrap();
        solver.add_clause(&Clause::new(vec![-1, 2])).unwrap();

        match solver.solve().unwrap() {
            Outcome::Satisfiable(model) => assert!(model.value(2)),
            other => panic!("expected satisfiable, got {:?}", other),
        }
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = SatSolver::new();
        solver.add_clause(&Clause::unit(1)).unwrap();
        solver.add_clause(&Clause::unit(-1)).unwrap();

        assert!(matches!(solver.solve().unwrap(), Outcome::Unsatisfiable));
    }

    #[test]
    fn test_empty_clause_is_engine_error() {
        let mut solver = SatSolver::new();
        let err = solver.add_clause(&Clause::new(Vec::new())).unwrap_err();
        assert!(matches!(err, PuzzleError::Engine(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_variable_and_clause_counting() {
        let mut solver = SatSolver::new();
        solver.add_clause(&Clause::new(vec![1, -5, 3])).unwrap();
        assert_eq!(solver.variable_count(), 5);
        assert_eq!(solver.clause_count(), 1);

        solver.add_clause(&Clause::new(vec![2, -7])).unwrap();
        assert_eq!(solver.variable_count(), 7);
        assert_eq!(solver.clause_count(), 2);
    }

    #[test]
    fn test_unknown_verdict_is_surfaced() {
        let engine = StubEngine {
            verdict: Verdict::Unknown,
            values: HashMap::new(),
        };
        let mut solver = SatSolver::with_engine(engine);
        solver.add_clause(&Clause::unit(1)).unwrap();

        assert!(matches!(solver.solve().unwrap(), Outcome::Unknown));
    }

    #[test]
    fn test_model_defaults_missing_values_to_false() {
        let engine = StubEngine {
            verdict: Verdict::Satisfiable,
            values: HashMap::from([(1, true)]),
        };
        let mut solver = SatSolver::with_engine(engine);
        solver.add_clause(&Clause::new(vec![1, 2])).unwrap();

        match solver.solve().unwrap() {
            Outcome::Satisfiable(model) => {
                assert!(model.value(1));
                assert!(!model.value(2)); // unassigned by the stub
                assert!(!model.value(99)); // never mentioned
            }
            other => panic!("expected satisfiable, got {:?}", other),
        }
    }
}
