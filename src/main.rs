//! Main CLI application for the bingo puzzle SAT solver

use anyhow::{bail, Context, Result};
use bingo_sat::{
    config::{CliOverrides, OutputFormat, Settings},
    puzzle::{load_puzzle_from_file, Puzzle, Rule},
    solve::{BingoProblem, SolveOutcome},
    utils::{ColorOutput, ReportFormatter},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bingo_sat")]
#[command(about = "Color-rule Bingo SAT Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a bingo puzzle
    Solve {
        /// Rule names in row-major order (25 tokens)
        #[arg(value_name = "RULE")]
        tokens: Vec<String>,

        /// Puzzle file to load instead of tokens (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the report to this file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the nine cell rules
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            tokens,
            file,
            config,
            format,
            output,
            verbose,
        } => solve_command(tokens, file, config, format, output, verbose),
        Commands::Rules => {
            rules_command();
            Ok(())
        }
    }
}

fn solve_command(
    tokens: Vec<String>,
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = match &config_path {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        puzzle_file: file,
        format,
        output_file: output,
    };
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;

    // Build the puzzle from tokens or from a file
    let puzzle = if !tokens.is_empty() {
        Puzzle::from_tokens(&tokens).context("Invalid puzzle tokens")?
    } else if let Some(path) = &settings.input.puzzle_file {
        load_puzzle_from_file(path)
            .with_context(|| format!("Failed to load puzzle from {}", path.display()))?
    } else {
        bail!("No puzzle given: pass 25 rule names or --file <puzzle.yaml>");
    };

    if verbose {
        println!("Puzzle:");
        println!("{}", puzzle);
    }

    println!("{}", ColorOutput::info("Encoding puzzle and solving..."));
    let report = BingoProblem::new(puzzle)
        .solve()
        .context("Failed to solve puzzle")?;

    match &report.outcome {
        SolveOutcome::Solved(_) => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Solved in {:.3}s",
                    report.solve_time.as_secs_f64()
                ))
            );
        }
        SolveOutcome::Unsatisfiable => {
            println!("{}", ColorOutput::warning("No solution exists"));
        }
        SolveOutcome::Inconclusive => {}
    }

    print!(
        "{}",
        ReportFormatter::render(&report, settings.output.format, verbose)?
    );

    if let Some(path) = &settings.output.output_file {
        ReportFormatter::save_report(&report, path, settings.output.format)
            .context("Failed to save report")?;
        println!(
            "{}",
            ColorOutput::info(&format!("Report saved to {}", path.display()))
        );
    }

    if matches!(report.outcome, SolveOutcome::Inconclusive) {
        bail!("The satisfiability engine stopped without a verdict");
    }

    Ok(())
}

fn rules_command() {
    println!("Cell rules (one per grid cell, row-major order):\n");
    for rule in Rule::ALL {
        println!("  {:8} {}", rule.name(), rule.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "bingo_sat", "solve", "--file", "puzzle.yaml", "--format", "json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Solve {
                format: Some(OutputFormat::Json),
                ..
            }
        ));

        assert!(Cli::try_parse_from(["bingo_sat", "rules"]).is_ok());
    }

    #[test]
    fn test_cli_tokens() {
        let mut args = vec!["bingo_sat".to_string(), "solve".to_string()];
        args.extend(std::iter::repeat("empty".to_string()).take(25));

        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Solve { tokens, .. } => assert_eq!(tokens.len(), 25),
            _ => panic!("expected solve command"),
        }
    }
}
