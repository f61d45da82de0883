//! Error types for env file parsing.
//!
//! Invariants:
//! - Variants carry the 1-based line number of the failure.
//! - Messages NEVER include raw line contents, keys or values, since env files
//!   routinely hold secrets.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that abort a parse. No partial mapping is ever returned alongside.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-blank, non-comment line has neither `=` nor `:`.
    #[error("line {line} is not a key value pair: expected '=' or ':' separator")]
    NoSeparator { line: usize },

    /// The key or the value is empty once `export`, comments and whitespace are removed.
    #[error("line {line} has an empty key or value")]
    InvalidPair { line: usize },

    /// The underlying reader failed or produced invalid UTF-8.
    #[error("failed to read line {line}: {kind}")]
    Read { line: usize, kind: ErrorKind },
}

impl ParseError {
    /// Line number (1-based) the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::NoSeparator { line }
            | ParseError::InvalidPair { line }
            | ParseError::Read { line, .. } => *line,
        }
    }
}
