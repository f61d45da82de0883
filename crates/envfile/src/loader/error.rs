//! Error types for env file loading.
//!
//! Responsibilities:
//! - Define error variants for open, parse and set failures.
//! - Attach the offending file path to every variant.
//!
//! Invariants:
//! - Errors NEVER include raw env file contents or variable values.
//! - The underlying `io::Error` of a failed open is kept as the error source.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::parser::ParseError;

/// Errors that abort a load. Files after the failing one are not processed.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The env file could not be opened (missing, permission denied, ...).
    #[error("Failed to open env file at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The env file was opened but its contents are invalid.
    #[error("Failed to parse env file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The environment refused one of the parsed variables.
    #[error("Failed to apply env file at {path}: {source}")]
    Set {
        path: PathBuf,
        #[source]
        source: EnvironmentSetError,
    },
}

impl LoadError {
    /// Path of the file being processed when the error occurred.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Set { path, .. } => path,
        }
    }
}

/// Errors raised by `Environment::set_if_absent`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentSetError {
    #[error("Invalid environment variable name {key:?}: must be non-empty and contain no '=' or NUL")]
    InvalidKey { key: String },

    #[error("Invalid value for environment variable {key:?}: contains NUL")]
    InvalidValue { key: String },
}
