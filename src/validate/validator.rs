//! Core validation logic for bracket balance.

use crate::stack::{CharStack, DEFAULT_CAPACITY};

use super::brackets::{Bracket, is_matching_pair};
use super::types::{SyntaxError, TraceEntry, ValidationResult};

/// Scans expressions for bracket balance using an owned bounded stack.
///
/// The stack is reset at the start of every [`Validator::validate`] call, so a
/// validator can be reused across expressions. Its contents after a run stay
/// readable through [`Validator::stack`]. Validators are not shared; give each
/// thread its own.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    stack: CharStack,
}

impl Validator {
    /// Create a validator whose stack holds at most `capacity` pending openers.
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: CharStack::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// The stack as left by the most recent run.
    pub fn stack(&self) -> &CharStack {
        &self.stack
    }

    /// Validate bracket balance in `expression`.
    ///
    /// Performs a single left-to-right pass:
    /// 1. Openers are pushed (overflow stops the scan with `CapacityExceeded`)
    /// 2. Closers pop the innermost opener; an empty stack or a family
    ///    mismatch stops the scan at that position
    /// 3. Openers still pending at end of input are reported together
    ///
    /// Non-bracket characters are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use bracecheck::validate::{ErrorKind, Validator};
    ///
    /// let mut validator = Validator::new(100);
    ///
    /// assert!(validator.validate("{[a+b]*(c+d)}").is_valid());
    ///
    /// let result = validator.validate("a+b)");
    /// assert_eq!(result.error_kind(), Some(ErrorKind::UnmatchedClosing));
    /// assert_eq!(result.error.unwrap().position(), 4);
    /// ```
    pub fn validate(&mut self, expression: &str) -> ValidationResult {
        self.stack.reset();

        let length = expression.chars().count();
        let mut trace = Vec::new();

        for (index, c) in expression.chars().enumerate() {
            let position = index + 1;

            match Bracket::classify(c) {
                Some(Bracket::Open(_)) => {
                    if self.stack.push(c).is_err() {
                        trace.push(TraceEntry::Error { position, found: c });
                        let error = SyntaxError::CapacityExceeded {
                            position,
                            found: c,
                            capacity: self.stack.capacity(),
                        };
                        return ValidationResult::fail(error, trace, length);
                    }
                    trace.push(TraceEntry::Push {
                        position,
                        opener: c,
                    });
                }
                Some(Bracket::Close(_)) => {
                    let Ok(top) = self.stack.pop() else {
                        trace.push(TraceEntry::Error { position, found: c });
                        let error = SyntaxError::UnmatchedClosing { position, found: c };
                        return ValidationResult::fail(error, trace, length);
                    };

                    if !is_matching_pair(top, c) {
                        trace.push(TraceEntry::Error { position, found: c });
                        let error = SyntaxError::WrongPairType {
                            position,
                            expected_opener: top,
                            found: c,
                        };
                        return ValidationResult::fail(error, trace, length);
                    }

                    trace.push(TraceEntry::Matched {
                        position,
                        opener: top,
                        closer: c,
                    });
                }
                None => {}
            }
        }

        if !self.stack.is_empty() {
            let error = SyntaxError::UnmatchedOpening {
                position: length,
                remaining: self.stack.snapshot(),
            };
            return ValidationResult::fail(error, trace, length);
        }

        ValidationResult::pass(trace, length)
    }
}

/// Validate `expression` with a fresh stack of the default capacity.
pub fn validate(expression: &str) -> ValidationResult {
    validate_with_capacity(expression, DEFAULT_CAPACITY)
}

/// Validate `expression` with a fresh stack of the given capacity.
pub fn validate_with_capacity(expression: &str, capacity: usize) -> ValidationResult {
    Validator::new(capacity).validate(expression)
}
