//! Plain-text rendering of validation results.

use crate::stack::CharStack;

use super::types::{SyntaxError, TraceEntry, ValidationResult};

const RULE: &str = "----------------------------------------";

/// Which optional sections to include in a text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_trace: bool,
    pub show_stack: bool,
    pub show_complexity: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_trace: true,
            show_stack: false,
            show_complexity: false,
        }
    }
}

impl TraceEntry {
    /// Render as a single trace line, e.g. `Position  1: '(' -> push`.
    pub fn format_line(&self) -> String {
        match self {
            TraceEntry::Push { position, opener } => {
                format!("Position {:>2}: '{}' -> push", position, opener)
            }
            TraceEntry::Matched {
                position,
                opener,
                closer,
            } => format!(
                "Position {:>2}: '{}' -> pop '{}' (matched)",
                position, closer, opener
            ),
            TraceEntry::Error { position, found } => {
                format!("Position {:>2}: '{}' -> error", position, found)
            }
        }
    }
}

impl ValidationResult {
    /// Trace lines, one per recorded action.
    pub fn format_trace(&self) -> String {
        let mut out = String::new();
        for entry in &self.trace {
            out.push_str(&entry.format_line());
            out.push('\n');
        }
        out
    }

    /// The verdict block.
    ///
    /// ```text
    /// Syntax error at position 6
    ///   expected closing bracket for '[', but found ')'
    /// ```
    pub fn format_verdict(&self) -> String {
        match &self.error {
            None => "Syntax is correct: all brackets are balanced\n".to_string(),
            Some(error @ SyntaxError::UnmatchedOpening { .. }) => format!(
                "Syntax error: unmatched opening bracket(s) remain\n  {}\n",
                error.describe()
            ),
            Some(error) => format!(
                "Syntax error at position {}\n  {}\n",
                error.position(),
                error.describe()
            ),
        }
    }
}

/// Describe the stack contents, top first.
pub fn format_stack_status(stack: &CharStack) -> String {
    if stack.is_empty() {
        return "Stack is empty\n".to_string();
    }

    let items: Vec<String> = stack.snapshot().iter().map(char::to_string).collect();
    format!("Current stack (top -> bottom): {}\n", items.join(" "))
}

/// Length and cost summary for one scan.
pub fn format_complexity(length: usize) -> String {
    format!(
        "Expression length: {} characters\n\
         Time complexity: O(n) where n = {}\n\
         Space complexity: O(n) for stack storage\n",
        length, length
    )
}

/// Full text report for one expression.
///
/// `stack` is the validator's stack after the run and is only read when
/// `options.show_stack` is set.
pub fn format_report(
    expression: &str,
    result: &ValidationResult,
    stack: &CharStack,
    options: ReportOptions,
) -> String {
    let mut out = format!("Analyzing expression: {}\n{}\n", expression, RULE);

    if options.show_trace {
        out.push_str(&result.format_trace());
    }

    out.push_str(&result.format_verdict());

    if options.show_stack {
        out.push_str(&format_stack_status(stack));
    }

    if options.show_complexity {
        out.push_str(&format_complexity(result.length));
    }

    out
}
