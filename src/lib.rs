//! Bracecheck: bracket-balance validation backed by a bounded character stack.
//!
//! The core lives in [`validate`] (the scan and its result model) and
//! [`stack`] (the fixed-capacity stack it scans with). The remaining modules
//! support the `bracecheck` binary: configuration, error/exit-code mapping,
//! the NDJSON event log, and the built-in sample cases.
//!
//! ```
//! use bracecheck::validate::{SyntaxError, validate};
//!
//! let result = validate("{[a+b)}");
//! assert_eq!(
//!     result.error,
//!     Some(SyntaxError::WrongPairType { position: 6, expected_opener: '[', found: ')' })
//! );
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod samples;
pub mod stack;
pub mod validate;
