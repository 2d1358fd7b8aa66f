//! Core types for bracket validation results.

use serde::Serialize;
use std::fmt;

/// Overall outcome of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    SyntaxError,
}

/// The kind of violation, without its positional data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnmatchedClosing,
    WrongPairType,
    UnmatchedOpening,
    CapacityExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnmatchedClosing => write!(f, "unmatched_closing"),
            ErrorKind::WrongPairType => write!(f, "wrong_pair_type"),
            ErrorKind::UnmatchedOpening => write!(f, "unmatched_opening"),
            ErrorKind::CapacityExceeded => write!(f, "capacity_exceeded"),
        }
    }
}

/// The first bracket violation found in an expression.
///
/// Positions are 1-based character offsets into the expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxError {
    /// A closer appeared while no opener was pending.
    UnmatchedClosing { position: usize, found: char },

    /// A closer did not match the innermost pending opener.
    WrongPairType {
        position: usize,
        expected_opener: char,
        found: char,
    },

    /// Openers were still pending at end of input.
    ///
    /// `position` is the end of input (the character count) and `remaining`
    /// lists the pending openers, most recent first.
    UnmatchedOpening { position: usize, remaining: Vec<char> },

    /// An opener could not be pushed because the stack was full.
    CapacityExceeded {
        position: usize,
        found: char,
        capacity: usize,
    },
}

impl SyntaxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::UnmatchedClosing { .. } => ErrorKind::UnmatchedClosing,
            SyntaxError::WrongPairType { .. } => ErrorKind::WrongPairType,
            SyntaxError::UnmatchedOpening { .. } => ErrorKind::UnmatchedOpening,
            SyntaxError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnmatchedClosing { position, .. }
            | SyntaxError::WrongPairType { position, .. }
            | SyntaxError::UnmatchedOpening { position, .. }
            | SyntaxError::CapacityExceeded { position, .. } => *position,
        }
    }

    /// Human-readable explanation of the violation, without the position.
    pub fn describe(&self) -> String {
        match self {
            SyntaxError::UnmatchedClosing { found, .. } => format!(
                "found closing bracket '{}' without matching opening bracket",
                found
            ),
            SyntaxError::WrongPairType {
                expected_opener,
                found,
                ..
            } => format!(
                "expected closing bracket for '{}', but found '{}'",
                expected_opener, found
            ),
            SyntaxError::UnmatchedOpening { remaining, .. } => {
                let quoted: Vec<String> = remaining.iter().map(|c| format!("'{}'", c)).collect();
                format!("missing closing bracket(s) for: {}", quoted.join(" "))
            }
            SyntaxError::CapacityExceeded {
                found, capacity, ..
            } => format!(
                "cannot push '{}': stack capacity of {} reached",
                found, capacity
            ),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnmatchedOpening { .. } => {
                write!(f, "unmatched opening bracket(s) remain; {}", self.describe())
            }
            _ => write!(f, "at position {}: {}", self.position(), self.describe()),
        }
    }
}

/// One action taken during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TraceEntry {
    /// An opener was pushed.
    Push { position: usize, opener: char },
    /// A closer popped its matching opener.
    Matched {
        position: usize,
        opener: char,
        closer: char,
    },
    /// The scan stopped at this character.
    Error { position: usize, found: char },
}

impl TraceEntry {
    pub fn position(&self) -> usize {
        match self {
            TraceEntry::Push { position, .. }
            | TraceEntry::Matched { position, .. }
            | TraceEntry::Error { position, .. } => *position,
        }
    }
}

/// Result of validating one expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Valid, or SyntaxError when `error` is set.
    pub verdict: Verdict,
    /// The first violation found (None if valid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SyntaxError>,
    /// Push/match/error actions in scan order.
    pub trace: Vec<TraceEntry>,
    /// Expression length in characters.
    pub length: usize,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn pass(trace: Vec<TraceEntry>, length: usize) -> Self {
        Self {
            verdict: Verdict::Valid,
            error: None,
            trace,
            length,
        }
    }

    /// Create a failing result for the given violation.
    pub fn fail(error: SyntaxError, trace: Vec<TraceEntry>, length: usize) -> Self {
        Self {
            verdict: Verdict::SyntaxError,
            error: Some(error),
            trace,
            length,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(SyntaxError::kind)
    }
}
