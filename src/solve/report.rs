//! Solve outcomes and reports

use crate::puzzle::Board;
use crate::sat::EncodingStatistics;
use std::time::Duration;

/// Final verdict of one puzzle solve.
///
/// `Unsatisfiable` means the puzzle provably has no marking; `Inconclusive`
/// means the engine gave up without a verdict. Both are reported, not thrown.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Solved(Board),
    Unsatisfiable,
    Inconclusive,
}

/// Everything one solve produced: the verdict plus encoding and timing data
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub statistics: EncodingStatistics,
    pub solve_time: Duration,
}

impl SolveReport {
    /// The witness board, if the puzzle was solved
    pub fn board(&self) -> Option<&Board> {
        match &self.outcome {
            SolveOutcome::Solved(board) => Some(board),
            _ => None,
        }
    }

    /// Whether a witness was found
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statistics() -> EncodingStatistics {
        EncodingStatistics {
            variables: 25,
            clauses: 100,
            nodes: 50,
        }
    }

    #[test]
    fn test_board_accessor() {
        let report = SolveReport {
            outcome: SolveOutcome::Solved(Board::new()),
            statistics: statistics(),
            solve_time: Duration::from_millis(5),
        };
        assert!(report.is_solved());
        assert!(report.board().is_some());

        let report = SolveReport {
            outcome: SolveOutcome::Unsatisfiable,
            statistics: statistics(),
            solve_time: Duration::from_millis(5),
        };
        assert!(!report.is_solved());
        assert!(report.board().is_none());
    }
}
