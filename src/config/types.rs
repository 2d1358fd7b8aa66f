//! Configuration types and defaults for bracecheck.

use crate::stack::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "bracecheck.yaml";

/// How check results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable report with trace lines (default).
    #[default]
    Text,
    /// One JSON array of validation results.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}
pub(crate) fn default_true() -> bool {
    true
}
