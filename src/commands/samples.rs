//! Implementation of the `bracecheck samples` command.

use super::{load_config, log_result, write_failed};
use crate::cli::SamplesArgs;
use bracecheck::config::{Config, ConfigOverrides, OutputFormat};
use bracecheck::error::{CheckError, Result};
use bracecheck::events::EventAction;
use bracecheck::samples::run_samples;
use bracecheck::validate::Validator;
use std::io::{self, Write};
use std::path::Path;

/// Execute the `bracecheck samples` command.
pub fn cmd_samples(args: SamplesArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = ConfigOverrides {
        capacity: args.capacity,
        output: args.json.then_some(OutputFormat::Json),
        ..Default::default()
    };
    let config = load_config(config_path, overrides)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_sample_check(&config, &mut out)
}

/// Run the sample cases and write expected vs. actual outcomes to `out`.
///
/// Fails with a syntax failure when any sample does not produce its expected
/// outcome (for example under a very small capacity).
pub(crate) fn run_sample_check<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let mut validator = Validator::new(config.capacity);
    let outcomes = run_samples(&mut validator);

    for outcome in &outcomes {
        log_result(config, EventAction::Samples, outcome.expression, &outcome.result);
    }

    match config.output {
        OutputFormat::Text => {
            writeln!(out, "Sample test cases (capacity {}):", config.capacity)
                .map_err(write_failed)?;
            for outcome in &outcomes {
                writeln!(out, "  {}", outcome.format_line()).map_err(write_failed)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcomes).map_err(|e| {
                CheckError::UserError(format!("failed to serialize samples to JSON: {}", e))
            })?;
            writeln!(out, "{}", json).map_err(write_failed)?;
        }
    }

    let mismatched = outcomes.iter().filter(|o| !o.matches_expectation()).count();
    if mismatched > 0 {
        return Err(CheckError::SyntaxError(format!(
            "{} of {} samples did not produce their expected outcome",
            mismatched,
            outcomes.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracecheck::exit_codes;

    #[test]
    fn test_samples_pass_with_default_config() {
        let mut out = Vec::new();
        let result = run_sample_check(&Config::default(), &mut out);

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Sample test cases (capacity 100):"));
        assert_eq!(output.lines().count(), 9);
        assert!(!output.contains("FAIL"));
        assert!(output.contains("-> wrong_pair_type (Wrong bracket type)"));
    }

    #[test]
    fn test_samples_fail_with_tiny_capacity() {
        let config = Config {
            capacity: 1,
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run_sample_check(&config, &mut out).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::SYNTAX_FAILURE);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("FAIL"));
        assert!(output.contains("capacity_exceeded"));
    }

    #[test]
    fn test_samples_json_output() {
        let config = Config {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let mut out = Vec::new();
        run_sample_check(&config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let samples = value.as_array().unwrap();
        assert_eq!(samples.len(), 8);
        assert_eq!(samples[5]["expression"], "((a+b)");
        assert_eq!(samples[5]["expected"], "unmatched_opening");
        assert_eq!(samples[5]["result"]["error"]["remaining"][0], "(");
        assert!(samples[0]["expected"].is_null());
        assert!(samples[0].get("note").is_none());
    }
}
