//! Command implementations for bracecheck.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share.

mod check;
mod samples;

use crate::cli::{Cli, Command};
use bracecheck::config::{Config, ConfigOverrides};
use bracecheck::error::{CheckError, Result};
use bracecheck::events::{Event, EventAction, append_event};
use bracecheck::validate::ValidationResult;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Check(args) => check::cmd_check(args, config_path),
        Command::Samples(args) => samples::cmd_samples(args, config_path),
    }
}

/// Resolve the config file (explicit path or `./bracecheck.yaml`) and apply
/// command-line overrides.
fn load_config(explicit: Option<&Path>, overrides: ConfigOverrides) -> Result<Config> {
    let cwd = std::env::current_dir().map_err(|e| {
        CheckError::UserError(format!("failed to determine current directory: {}", e))
    })?;

    Config::resolve(explicit, &cwd)?.apply_overrides(overrides)
}

/// Append an event for `result` if an event log is configured.
///
/// Logging problems are reported as warnings and never change the outcome.
fn log_result(config: &Config, action: EventAction, expression: &str, result: &ValidationResult) {
    let Some(path) = &config.event_log else {
        return;
    };

    let event = Event::for_result(action, expression, result);
    if let Err(e) = append_event(path, &event) {
        eprintln!("Warning: failed to log {} event: {}", action, e);
    }
}

fn write_failed(e: std::io::Error) -> CheckError {
    CheckError::UserError(format!("failed to write output: {}", e))
}
