//! CLI argument parsing for bracecheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bracecheck: validate that `( { [` brackets are balanced and correctly nested.
///
/// Non-bracket characters are ignored. Only the first violation in each
/// expression is reported.
#[derive(Parser, Debug)]
#[command(name = "bracecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use (defaults to ./bracecheck.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for bracecheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one or more expressions.
    ///
    /// With no expressions given, reads one expression per line from stdin.
    Check(CheckArgs),

    /// Run the built-in sample expressions.
    ///
    /// Shows the expected and actual outcome for each sample.
    Samples(SamplesArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Expressions to check.
    pub expressions: Vec<String>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Omit per-position trace lines.
    #[arg(long)]
    pub no_trace: bool,

    /// Print the stack status after each check.
    #[arg(long)]
    pub stack: bool,

    /// Print the length and complexity summary after each check.
    #[arg(long)]
    pub stats: bool,

    /// Maximum number of pending openers.
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Append an NDJSON event per expression to this file.
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

/// Arguments for the `samples` command.
#[derive(Parser, Debug)]
pub struct SamplesArgs {
    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Maximum number of pending openers.
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_minimal() {
        let cli = Cli::try_parse_from(["bracecheck", "check", "{[a+b]}"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.expressions, vec!["{[a+b]}"]);
            assert!(!args.json);
            assert!(!args.no_trace);
            assert!(args.capacity.is_none());
            assert!(args.log.is_none());
        } else {
            panic!("Expected Check command");
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_check_full() {
        let cli = Cli::try_parse_from([
            "bracecheck",
            "--config",
            "custom.yaml",
            "check",
            "((a+b)",
            "a+b)",
            "--json",
            "--no-trace",
            "--stack",
            "--stats",
            "--capacity",
            "8",
            "--log",
            "events.ndjson",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        if let Command::Check(args) = cli.command {
            assert_eq!(args.expressions, vec!["((a+b)", "a+b)"]);
            assert!(args.json);
            assert!(args.no_trace);
            assert!(args.stack);
            assert!(args.stats);
            assert_eq!(args.capacity, Some(8));
            assert_eq!(args.log, Some(PathBuf::from("events.ndjson")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_without_expressions() {
        let cli = Cli::try_parse_from(["bracecheck", "check"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert!(args.expressions.is_empty());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["bracecheck", "samples", "--config", "b.yaml", "--json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("b.yaml")));
        if let Command::Samples(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Samples command");
        }
    }

    #[test]
    fn parse_rejects_non_numeric_capacity() {
        let result = Cli::try_parse_from(["bracecheck", "check", "()", "--capacity", "lots"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["bracecheck"]).is_err());
    }
}
