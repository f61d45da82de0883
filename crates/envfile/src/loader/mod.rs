//! Env file loader for the process environment and in-memory environments.
//!
//! Responsibilities:
//! - Resolve the list of env files (default `.env`) and load them in order.
//! - Apply parsed variables with set-if-absent semantics.
//! - Provide the `load*` entry points and the `EnvLoader` builder.
//!
//! Does NOT handle:
//! - Line parsing (see `parser`).
//! - Locking the process environment. Call `load` once, early, before other
//!   threads exist.
//!
//! Invariants / Assumptions:
//! - Existing variables are never overwritten, so loading is idempotent.
//! - The first open, parse or set failure aborts the whole call.

mod builder;
mod env;
mod error;
mod report;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use builder::{EnvLoader, read_file};
pub use env::{Environment, MemoryEnv, ProcessEnv};
pub use error::{EnvironmentSetError, LoadError};
pub use report::LoadReport;

/// Load env files into the process environment, in order.
///
/// An empty slice loads `.env` from the current directory. Variables that are
/// already set keep their values.
pub fn load<P: AsRef<Path>>(filenames: &[P]) -> Result<LoadReport, LoadError> {
    load_into(&mut ProcessEnv, filenames)
}

/// Load `.env` from the current directory into the process environment.
pub fn load_default() -> Result<LoadReport, LoadError> {
    EnvLoader::new().load()
}

/// Load env files into `env`, in order. An empty slice loads `.env`.
pub fn load_into<E, P>(env: &mut E, filenames: &[P]) -> Result<LoadReport, LoadError>
where
    E: Environment + ?Sized,
    P: AsRef<Path>,
{
    EnvLoader::new().with_files(filenames).load_into(env)
}
