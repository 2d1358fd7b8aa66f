//! Exit code constants for the bracecheck CLI.
//!
//! - 0: Success (every expression balanced)
//! - 1: User error (bad args, unreadable config, empty expression)
//! - 2: Syntax failure (at least one expression is unbalanced)
//! - 3: Capacity failure (an expression overflowed the bracket stack)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or I/O failure.
pub const USER_ERROR: i32 = 1;

/// Syntax failure: unmatched or mismatched brackets.
pub const SYNTAX_FAILURE: i32 = 2;

/// Capacity failure: more pending openers than the stack can hold.
pub const CAPACITY_FAILURE: i32 = 3;
