//! Configuration settings for the bingo puzzle solver

use crate::error::PuzzleError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Puzzle file to load when no rule tokens are given on the command line
    pub puzzle_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Also write the report to this file
    pub output_file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            output_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, PuzzleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PuzzleError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let settings: Settings = serde_yaml::from_str(&content).map_err(|e| {
            PuzzleError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<(), PuzzleError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| PuzzleError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PuzzleError::Config(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(path, content).map_err(|e| {
            PuzzleError::Config(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if let Some(puzzle_file) = &self.input.puzzle_file {
            if !puzzle_file.exists() {
                return Err(PuzzleError::Config(format!(
                    "puzzle file does not exist: {}",
                    puzzle_file.display()
                )));
            }
        }
        Ok(())
    }

    /// Apply command line overrides
    pub fn merge_with_cli(&mut self, overrides: &CliOverrides) {
        if let Some(puzzle_file) = &overrides.puzzle_file {
            self.input.puzzle_file = Some(puzzle_file.clone());
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(output_file) = &overrides.output_file {
            self.output.output_file = Some(output_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub puzzle_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
}
