//! Bracket-balance validation.
//!
//! A single left-to-right scan over an expression, backed by a bounded
//! character stack:
//! - Openers `( { [` are pushed
//! - Closers `) } ]` must match the innermost pending opener
//! - Anything else is ignored
//!
//! Only the first violation is reported. Every violation, including stack
//! overflow, comes back as data in [`ValidationResult`]; nothing here panics
//! or aborts on malformed input.

pub mod brackets;
mod report;
mod types;
mod validator;


// Re-export public API
pub use brackets::{Bracket, BracketFamily, is_closer, is_matching_pair, is_opener};
pub use report::{ReportOptions, format_complexity, format_report, format_stack_status};
pub use types::{ErrorKind, SyntaxError, TraceEntry, ValidationResult, Verdict};
pub use validator::{Validator, validate, validate_with_capacity};
