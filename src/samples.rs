//! Built-in sample expressions with known outcomes.
//!
//! These cover each verdict the validator can produce for ordinary input and
//! double as a quick self-check of a build (`bracecheck samples`).

use crate::validate::{ErrorKind, ValidationResult, Validator};
use serde::Serialize;

/// A sample expression and the outcome it is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCase {
    pub expression: &'static str,
    /// `None` when the expression is balanced.
    pub expected: Option<ErrorKind>,
    /// Short label shown next to invalid samples.
    pub note: &'static str,
}

pub const SAMPLE_CASES: [SampleCase; 8] = [
    SampleCase {
        expression: "{[a+b]*(c+d)}",
        expected: None,
        note: "",
    },
    SampleCase {
        expression: "((a+b)*c)",
        expected: None,
        note: "",
    },
    SampleCase {
        expression: "{[(x+y)*(a-b)]}",
        expected: None,
        note: "",
    },
    SampleCase {
        expression: "[a+(b*c)]",
        expected: None,
        note: "",
    },
    SampleCase {
        expression: "{[(a+b]*c}",
        expected: Some(ErrorKind::WrongPairType),
        note: "Mismatched brackets",
    },
    SampleCase {
        expression: "((a+b)",
        expected: Some(ErrorKind::UnmatchedOpening),
        note: "Missing closing bracket",
    },
    SampleCase {
        expression: "a+b)",
        expected: Some(ErrorKind::UnmatchedClosing),
        note: "Extra closing bracket",
    },
    SampleCase {
        expression: "{[a+b)}",
        expected: Some(ErrorKind::WrongPairType),
        note: "Wrong bracket type",
    },
];

/// The result of running one sample case.
#[derive(Debug, Clone, Serialize)]
pub struct SampleOutcome {
    pub expression: &'static str,
    pub expected: Option<ErrorKind>,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub note: &'static str,
    pub result: ValidationResult,
}

impl SampleOutcome {
    pub fn matches_expectation(&self) -> bool {
        self.result.error_kind() == self.expected
    }

    /// One summary line, e.g. `ok    a+b)  -> unmatched_closing (Extra closing bracket)`.
    pub fn format_line(&self) -> String {
        let status = if self.matches_expectation() {
            "ok"
        } else {
            "FAIL"
        };
        let actual = self
            .result
            .error_kind()
            .map_or_else(|| "valid".to_string(), |kind| kind.to_string());

        if self.note.is_empty() {
            format!("{:<5} {:<16} -> {}", status, self.expression, actual)
        } else {
            format!(
                "{:<5} {:<16} -> {} ({})",
                status, self.expression, actual, self.note
            )
        }
    }
}

/// Run every sample case through `validator`.
pub fn run_samples(validator: &mut Validator) -> Vec<SampleOutcome> {
    SAMPLE_CASES
        .iter()
        .map(|case| SampleOutcome {
            expression: case.expression,
            expected: case.expected,
            note: case.note,
            result: validator.validate(case.expression),
        })
        .collect()
}
