//! Event logging for bracecheck runs.
//!
//! Each validated expression can be appended to an NDJSON file (one JSON
//! object per line) configured via `event_log`.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The command that produced it (`check` or `samples`)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `expression`: The expression that was validated
//! - `details`: Verdict, error kind and position
//!
//! # Usage
//!
//! ```no_run
//! use bracecheck::events::{Event, EventAction, append_event};
//! use bracecheck::validate::validate;
//!
//! let result = validate("((a+b)");
//! let event = Event::for_result(EventAction::Check, "((a+b)", &result);
//! append_event("checks.ndjson", &event)?;
//! # Ok::<(), bracecheck::error::CheckError>(())
//! ```

use crate::error::{CheckError, Result};
use crate::validate::ValidationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Expression validated by `check`
    Check,
    /// Sample case validated by `samples`
    Samples,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Check => write!(f, "check"),
            EventAction::Samples => write!(f, "samples"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// The expression that was validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            expression: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Build the event describing one validation result.
    pub fn for_result(action: EventAction, expression: &str, result: &ValidationResult) -> Self {
        let details = match &result.error {
            None => json!({ "verdict": result.verdict, "length": result.length }),
            Some(error) => json!({
                "verdict": result.verdict,
                "length": result.length,
                "error_kind": error.kind(),
                "position": error.position(),
            }),
        };

        Self::new(action)
            .with_expression(expression)
            .with_details(details)
    }

    /// Set the expression for this event.
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CheckError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`.
///
/// The file (and its parent directory) is created if it doesn't exist.
/// Each append results in one line with a trailing newline.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let path = path.as_ref();
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                CheckError::UserError(format!(
                    "failed to create event log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            CheckError::UserError(format!(
                "failed to open event log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        CheckError::UserError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read all events from the log at `path`.
///
/// A missing file yields an empty list. Blank lines are skipped.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<Event>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        CheckError::UserError(format!(
            "failed to read event log '{}': {}",
            path.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| {
                CheckError::UserError(format!(
                    "failed to parse event on line {} of '{}': {}",
                    i + 1,
                    path.display(),
                    e
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use tempfile::TempDir;

    #[test]
    fn test_event_new_has_empty_details() {
        let event = Event::new(EventAction::Check);
        assert_eq!(event.action, EventAction::Check);
        assert!(event.expression.is_none());
        assert!(event.details.as_object().unwrap().is_empty());
        assert!(event.actor.contains('@'));
    }

    #[test]
    fn test_event_for_valid_result() {
        let result = validate("(a)");
        let event = Event::for_result(EventAction::Check, "(a)", &result);

        assert_eq!(event.expression.as_deref(), Some("(a)"));
        assert_eq!(event.details["verdict"], "valid");
        assert_eq!(event.details["length"], 3);
        assert!(event.details.get("error_kind").is_none());
    }

    #[test]
    fn test_event_for_failed_result() {
        let result = validate("a+b)");
        let event = Event::for_result(EventAction::Samples, "a+b)", &result);

        assert_eq!(event.details["verdict"], "syntax_error");
        assert_eq!(event.details["error_kind"], "unmatched_closing");
        assert_eq!(event.details["position"], 4);
    }

    #[test]
    fn test_ndjson_line_is_single_line() {
        let event = Event::new(EventAction::Check)
            .with_expression("{[\n]}")
            .with_details(json!({"note": "multi\nline"}));

        let line = event.to_ndjson_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"action\":\"check\""));
    }

    #[test]
    fn test_append_creates_file_and_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("events.ndjson");

        let event = Event::new(EventAction::Check).with_expression("()");
        append_event(&path, &event).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_append_multiple_events_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.ndjson");

        for expr in ["()", "(]", "(("] {
            let event = Event::for_result(EventAction::Check, expr, &validate(expr));
            append_event(&path, &event).unwrap();
        }

        let events = read_events(&path).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].expression.as_deref(), Some("()"));
        assert_eq!(events[1].details["error_kind"], "wrong_pair_type");
        assert_eq!(events[2].details["error_kind"], "unmatched_opening");
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let events = read_events(temp_dir.path().join("none.ndjson")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_read_corrupt_line_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.ndjson");
        std::fs::write(&path, "{not json}\n").unwrap();

        let err = read_events(&path).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_event_action_display() {
        assert_eq!(EventAction::Check.to_string(), "check");
        assert_eq!(EventAction::Samples.to_string(), "samples");
    }
}
