//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for bracecheck.
///
/// This struct represents the contents of `bracecheck.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Validator settings
    // =========================================================================
    /// Maximum number of pending openers the bracket stack holds.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    // =========================================================================
    // Report settings
    // =========================================================================
    /// Include per-position push/match lines in text reports.
    #[serde(default = "default_true")]
    pub show_trace: bool,

    /// Print the stack status left behind by each check.
    #[serde(default)]
    pub show_stack: bool,

    /// Print the length and time/space complexity summary after each check.
    #[serde(default)]
    pub show_complexity: bool,

    /// Output format for `check` and `samples`.
    #[serde(default)]
    pub output: OutputFormat,

    // =========================================================================
    // Logging settings
    // =========================================================================
    /// NDJSON file that check events are appended to (disabled when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            show_trace: default_true(),
            show_stack: false,
            show_complexity: false,
            output: OutputFormat::default(),
            event_log: None,
        }
    }
}
