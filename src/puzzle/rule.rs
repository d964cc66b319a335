//! The nine cell rules a puzzle can assign

use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A per-cell constraint kind.
///
/// Each cell of a puzzle carries exactly one rule; the encoder turns the rule
/// into a boolean predicate over the grid's variables. The set of rules is
/// closed, so dispatch is exhaustive and an unrecognized token fails at parse
/// time rather than at encoding time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Red,
    Blue,
    Black,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Empty,
}

impl Rule {
    /// All nine rules, in the order the CLI lists them
    pub const ALL: [Rule; 9] = [
        Rule::Red,
        Rule::Blue,
        Rule::Black,
        Rule::Green,
        Rule::Yellow,
        Rule::Orange,
        Rule::Purple,
        Rule::Pink,
        Rule::Empty,
    ];

    /// The lowercase token used in puzzle input
    pub fn name(self) -> &'static str {
        match self {
            Rule::Red => "red",
            Rule::Blue => "blue",
            Rule::Black => "black",
            Rule::Green => "green",
            Rule::Yellow => "yellow",
            Rule::Orange => "orange",
            Rule::Purple => "purple",
            Rule::Pink => "pink",
            Rule::Empty => "empty",
        }
    }

    /// A short human-readable statement of the rule's constraint
    pub fn description(self) -> &'static str {
        match self {
            Rule::Red => "at least one of the cell's neighbors is marked",
            Rule::Blue => "at most two of the cell's neighbors are marked",
            Rule::Black => "the cell itself is marked",
            Rule::Green => "the cell's row and column contain the same number of marks",
            Rule::Yellow => "the two diagonals through the cell contain the same number of marks",
            Rule::Orange => "the number of marked neighbors is even",
            Rule::Purple => "the number of marked neighbors is odd",
            Rule::Pink => "if the cell is marked, none of its orthogonal neighbors are",
            Rule::Empty => "no constraint",
        }
    }
}

impl FromStr for Rule {
    type Err = PuzzleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "red" => Ok(Rule::Red),
            "blue" => Ok(Rule::Blue),
            "black" => Ok(Rule::Black),
            "green" => Ok(Rule::Green),
            "yellow" => Ok(Rule::Yellow),
            "orange" => Ok(Rule::Orange),
            "purple" => Ok(Rule::Purple),
            "pink" => Ok(Rule::Pink),
            "empty" => Ok(Rule::Empty),
            other => Err(PuzzleError::UnknownRule(other.to_string())),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_rules() {
        for rule in Rule::ALL {
            let parsed: Rule = rule.name().parse().unwrap();
            assert_eq!(parsed, rule);
        }
    }

    #[test]
    fn test_parse_unknown_rule() {
        let err = "mauve".parse::<Rule>().unwrap_err();
        assert!(matches!(err, PuzzleError::UnknownRule(ref token) if token == "mauve"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Tokens are lowercase by contract
        assert!("Red".parse::<Rule>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for rule in Rule::ALL {
            assert_eq!(rule.to_string().parse::<Rule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_serde_names_match_tokens() {
        for rule in Rule::ALL {
            let yaml = serde_yaml::to_string(&rule).unwrap();
            assert_eq!(yaml.trim(), rule.name());
        }
    }
}
