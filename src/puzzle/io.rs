//! Puzzle file loading and saving
//!
//! A puzzle file is YAML: five rows, each a list of five rule names.

use super::{Puzzle, Rule};
use crate::error::PuzzleError;
use std::path::Path;

/// Load a puzzle from a YAML file
pub fn load_puzzle_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    let content = std::fs::read_to_string(&path).map_err(|e| {
        PuzzleError::PuzzleFile(format!("failed to read {}: {}", path.as_ref().display(), e))
    })?;

    parse_puzzle_from_yaml(&content).map_err(|e| {
        PuzzleError::PuzzleFile(format!("failed to parse {}: {}", path.as_ref().display(), e))
    })
}

/// Parse a puzzle from a YAML string
pub fn parse_puzzle_from_yaml(content: &str) -> Result<Puzzle, PuzzleError> {
    let rows: Vec<Vec<Rule>> =
        serde_yaml::from_str(content).map_err(|e| PuzzleError::PuzzleFile(e.to_string()))?;
    Puzzle::from_rows(rows)
}

/// Serialize a puzzle to a YAML string
pub fn puzzle_to_yaml(puzzle: &Puzzle) -> Result<String, PuzzleError> {
    serde_yaml::to_string(&puzzle.rows()).map_err(|e| PuzzleError::PuzzleFile(e.to_string()))
}

/// Save a puzzle to a YAML file
pub fn save_puzzle_to_file<P: AsRef<Path>>(puzzle: &Puzzle, path: P) -> Result<(), PuzzleError> {
    let content = puzzle_to_yaml(puzzle)?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            PuzzleError::PuzzleFile(format!("failed to create {}: {}", parent.display(), e))
        })?;
    }

    std::fs::write(&path, content).map_err(|e| {
        PuzzleError::PuzzleFile(format!("failed to write {}: {}", path.as_ref().display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_puzzle() {
        let yaml = "\
- [empty, empty, black, empty, empty]
- [empty, red, empty, red, empty]
- [black, empty, pink, empty, black]
- [empty, red, empty, red, empty]
- [empty, empty, black, empty, empty]
";
        let puzzle = parse_puzzle_from_yaml(yaml).unwrap();
        assert_eq!(puzzle.get(0, 2), Rule::Black);
        assert_eq!(puzzle.get(2, 2), Rule::Pink);
        assert_eq!(puzzle.get(1, 1), Rule::Red);
    }

    #[test]
    fn test_parse_rejects_unknown_rule() {
        let yaml = "\
- [empty, empty, empty, empty, empty]
- [empty, empty, empty, empty, empty]
- [empty, empty, mauve, empty, empty]
- [empty, empty, empty, empty, empty]
- [empty, empty, empty, empty, empty]
";
        assert!(matches!(
            parse_puzzle_from_yaml(yaml),
            Err(PuzzleError::PuzzleFile(_))
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let yaml = "\
- [empty, empty, empty]
- [empty, empty, empty]
";
        assert!(parse_puzzle_from_yaml(yaml).is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.yaml");

        let mut puzzle = Puzzle::uniform(Rule::Empty);
        puzzle.set(2, 2, Rule::Black);
        puzzle.set(0, 4, Rule::Yellow);

        save_puzzle_to_file(&puzzle, &path).unwrap();
        let loaded = load_puzzle_from_file(&path).unwrap();
        assert_eq!(loaded, puzzle);
    }

    #[test]
    fn test_missing_file() {
        let err = load_puzzle_from_file("/nonexistent/puzzle.yaml").unwrap_err();
        assert!(matches!(err, PuzzleError::PuzzleFile(_)));
        assert!(err.is_configuration());
    }
}
