//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::error::PuzzleError;
use crate::puzzle::Board;
use crate::solve::{SolveOutcome, SolveReport};
use std::path::Path;

/// Format solve reports for display
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a report for console output
    pub fn format_report(report: &SolveReport, verbose: bool) -> String {
        let mut output = String::new();

        match &report.outcome {
            SolveOutcome::Solved(board) => {
                output.push_str("Solution:\n");
                output.push_str(&Self::format_board(board));
                output.push_str(&format!("Marked cells: {}\n", board.marked_count()));
            }
            SolveOutcome::Unsatisfiable => {
                output.push_str(
                    "UNSATISFIABLE: no marking of the grid satisfies every rule and completes a bingo\n",
                );
            }
            SolveOutcome::Inconclusive => {
                output.push_str("INCONCLUSIVE: the engine stopped without a verdict\n");
            }
        }

        if verbose {
            output.push('\n');
            output.push_str(&format!("{}\n", report.statistics));
            output.push_str(&format!(
                "Solve Time: {:.3}s\n",
                report.solve_time.as_secs_f64()
            ));
        }

        output
    }

    /// Format the witness board, one row per line
    pub fn format_board(board: &Board) -> String {
        let mut output = String::new();
        for row in board.rows() {
            let line: Vec<&str> = row.iter().map(|&cell| if cell { "X" } else { "O" }).collect();
            output.push_str(&line.join(" "));
            output.push('\n');
        }
        output
    }

    /// Serialize a report as pretty-printed JSON
    pub fn report_to_json(report: &SolveReport) -> Result<String, PuzzleError> {
        let status = match &report.outcome {
            SolveOutcome::Solved(_) => "solved",
            SolveOutcome::Unsatisfiable => "unsatisfiable",
            SolveOutcome::Inconclusive => "inconclusive",
        };

        let value = serde_json::json!({
            "status": status,
            "board": report.board(),
            "marked_cells": report.board().map(Board::marked_count),
            "statistics": report.statistics,
            "solve_time_ms": report.solve_time.as_millis() as u64,
        });

        serde_json::to_string_pretty(&value).map_err(|e| PuzzleError::Output(e.to_string()))
    }

    /// Render a report in the requested format
    pub fn render(report: &SolveReport, format: OutputFormat, verbose: bool) -> Result<String, PuzzleError> {
        match format {
            OutputFormat::Text => Ok(Self::format_report(report, verbose)),
            OutputFormat::Json => Self::report_to_json(report),
        }
    }

    /// Save a report to a file in the requested format
    pub fn save_report<P: AsRef<Path>>(
        report: &SolveReport,
        path: P,
        format: OutputFormat,
    ) -> Result<(), PuzzleError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PuzzleError::Output(format!("failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let content = Self::render(report, format, true)?;
        std::fs::write(path, content).map_err(|e| {
            PuzzleError::Output(format!("failed to write {}: {}", path.display(), e))
        })
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::EncodingStatistics;
    use std::time::Duration;

    fn solved_report() -> SolveReport {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(i, i, true).unwrap();
        }
        SolveReport {
            outcome: SolveOutcome::Solved(board),
            statistics: EncodingStatistics {
                variables: 40,
                clauses: 120,
                nodes: 80,
            },
            solve_time: Duration::from_millis(7),
        }
    }

    fn unsat_report() -> SolveReport {
        SolveReport {
            outcome: SolveOutcome::Unsatisfiable,
            statistics: EncodingStatistics {
                variables: 40,
                clauses: 120,
                nodes: 80,
            },
            solve_time: Duration::from_millis(7),
        }
    }

    #[test]
    fn test_board_formatting() {
        let report = solved_report();
        let text = ReportFormatter::format_board(report.board().unwrap());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "X O O O O");
        assert_eq!(lines[4], "O O O O X");
    }

    #[test]
    fn test_text_report() {
        let text = ReportFormatter::format_report(&solved_report(), true);
        assert!(text.contains("Solution:"));
        assert!(text.contains("Marked cells: 5"));
        assert!(text.contains("Solve Time:"));

        let text = ReportFormatter::format_report(&unsat_report(), false);
        assert!(text.contains("UNSATISFIABLE"));
        assert!(!text.contains("Solve Time:"));
    }

    #[test]
    fn test_json_report() {
        let json = ReportFormatter::report_to_json(&solved_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "solved");
        assert_eq!(value["marked_cells"], 5);
        assert_eq!(value["statistics"]["variables"], 40);

        let json = ReportFormatter::report_to_json(&unsat_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "unsatisfiable");
        assert!(value["board"].is_null());
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        ReportFormatter::save_report(&solved_report(), &path, OutputFormat::Json).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"status\""));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
