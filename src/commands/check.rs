//! Implementation of the `bracecheck check` command.
//!
//! Validates each expression with one reused validator, renders a report per
//! expression, and maps the worst outcome to an exit code:
//! - 0: every expression balanced
//! - 1: user error (no input, empty expression, bad config)
//! - 2: at least one syntax error
//! - 3: at least one expression overflowed the stack capacity

use super::{load_config, log_result, write_failed};
use crate::cli::CheckArgs;
use bracecheck::config::{Config, ConfigOverrides, OutputFormat};
use bracecheck::error::{CheckError, Result};
use bracecheck::events::EventAction;
use bracecheck::validate::{ErrorKind, ValidationResult, Validator, format_report};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// One expression and its result, as emitted in JSON output.
#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    expression: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// Execute the `bracecheck check` command.
pub fn cmd_check(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = ConfigOverrides {
        capacity: args.capacity,
        output: args.json.then_some(OutputFormat::Json),
        hide_trace: args.no_trace,
        show_stack: args.stack,
        show_complexity: args.stats,
        event_log: args.log,
    };
    let config = load_config(config_path, overrides)?;

    let expressions = if args.expressions.is_empty() {
        let stdin = io::stdin();
        read_expressions(stdin.lock())?
    } else {
        args.expressions
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_check(&config, &expressions, &mut out)
}

/// Read one expression per line, skipping blank lines.
pub(crate) fn read_expressions<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in reader.lines() {
        let line =
            line.map_err(|e| CheckError::UserError(format!("failed to read input: {}", e)))?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            expressions.push(line.to_string());
        }
    }
    Ok(expressions)
}

/// Validate `expressions` and write their reports to `out`.
pub(crate) fn run_check<W: Write>(config: &Config, expressions: &[String], out: &mut W) -> Result<()> {
    if expressions.is_empty() {
        return Err(CheckError::UserError(
            "no expressions to check.\n\n\
             Pass expressions as arguments or pipe them on stdin, one per line."
                .to_string(),
        ));
    }

    if let Some(index) = expressions.iter().position(|e| e.is_empty()) {
        return Err(CheckError::UserError(format!(
            "empty expression (argument {}).",
            index + 1
        )));
    }

    let mut validator = Validator::new(config.capacity);
    let mut results = Vec::with_capacity(expressions.len());

    for (i, expression) in expressions.iter().enumerate() {
        let result = validator.validate(expression);
        log_result(config, EventAction::Check, expression, &result);

        if config.output == OutputFormat::Text {
            if i > 0 {
                writeln!(out).map_err(write_failed)?;
            }
            let report = format_report(expression, &result, validator.stack(), config.report_options());
            write!(out, "{}", report).map_err(write_failed)?;
        }

        results.push(result);
    }

    if config.output == OutputFormat::Json {
        let records: Vec<CheckRecord<'_>> = expressions
            .iter()
            .zip(&results)
            .map(|(expression, result)| CheckRecord { expression, result })
            .collect();
        let json = serde_json::to_string_pretty(&records).map_err(|e| {
            CheckError::UserError(format!("failed to serialize results to JSON: {}", e))
        })?;
        writeln!(out, "{}", json).map_err(write_failed)?;
    }

    summarize(&results)
}

/// Map the results to the command outcome.
fn summarize(results: &[ValidationResult]) -> Result<()> {
    let total = results.len();
    let failed = results.iter().filter(|r| !r.is_valid()).count();
    let overflowed = results
        .iter()
        .filter(|r| r.error_kind() == Some(ErrorKind::CapacityExceeded))
        .count();

    if overflowed > 0 {
        return Err(CheckError::CapacityExceeded(format!(
            "{} of {} expressions nested deeper than the stack capacity",
            overflowed, total
        )));
    }

    if failed > 0 {
        return Err(CheckError::SyntaxError(format!(
            "{} of {} expressions have unbalanced brackets",
            failed, total
        )));
    }

    Ok(())
}
