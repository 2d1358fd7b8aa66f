//! Config loading, validation, and override operations.

use super::model::Config;
use super::types::{CONFIG_FILE_NAME, OutputFormat};
use crate::error::{CheckError, Result};
use crate::validate::ReportOptions;
use std::path::{Path, PathBuf};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub capacity: Option<usize>,
    pub output: Option<OutputFormat>,
    pub hide_trace: bool,
    pub show_stack: bool,
    pub show_complexity: bool,
    pub event_log: Option<PathBuf>,
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CheckError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CheckError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CheckError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Find the config to use.
    ///
    /// An explicit path must exist. Without one, `dir/bracecheck.yaml` is
    /// loaded when present; otherwise defaults apply.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `capacity` must be positive
    /// - `event_log` must not be an empty path
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CheckError::UserError(
                "config validation failed: capacity must be greater than 0".to_string(),
            ));
        }

        if let Some(path) = &self.event_log {
            if path.as_os_str().is_empty() {
                return Err(CheckError::UserError(
                    "config validation failed: event_log must not be empty (omit it to disable logging)"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(capacity) = overrides.capacity {
            self.capacity = capacity;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if overrides.hide_trace {
            self.show_trace = false;
        }
        if overrides.show_stack {
            self.show_stack = true;
        }
        if overrides.show_complexity {
            self.show_complexity = true;
        }
        if overrides.event_log.is_some() {
            self.event_log = overrides.event_log;
        }

        self.validate()?;
        Ok(self)
    }

    /// Text report sections selected by this config.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            show_trace: self.show_trace,
            show_stack: self.show_stack,
            show_complexity: self.show_complexity,
        }
    }
}
