//! Env file loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` over an ordered list of env files.
//! - Open, parse and apply each file to an `Environment`, stopping at the
//!   first failure.
//! - Honor the optional `DOTENV_DISABLED` gate and the optional
//!   missing-file tolerance.
//!
//! Does NOT handle:
//! - Line parsing rules (see `parser`).
//! - How a variable is stored (see `env.rs`).
//!
//! Invariants / Assumptions:
//! - Files are processed in the order they were added.
//! - An empty file list means the single default `.env` file.
//! - Existing environment entries are never overwritten.
//! - Defaults mirror `load()`: no gate, missing files are errors.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::env::{Environment, ProcessEnv};
use super::error::LoadError;
use super::report::LoadReport;
use crate::constants::{DEFAULT_ENV_FILE, DOTENV_DISABLED_VAR};
use crate::parser::{EnvMap, parse};

/// Loader that applies one or more env files to an environment.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    files: Vec<PathBuf>,
    ignore_missing: bool,
    respect_disable_var: bool,
}

impl EnvLoader {
    /// Create a loader for the default `.env` file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file to load.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Append several files to load, in order.
    pub fn with_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Skip files that do not exist instead of failing.
    ///
    /// Only `NotFound` is tolerated; permission and other I/O errors still abort.
    pub fn ignore_missing(mut self, ignore: bool) -> Self {
        self.ignore_missing = ignore;
        self
    }

    /// Make loading a no-op when `DOTENV_DISABLED` is `1` or `true`.
    ///
    /// The variable is always read from the process environment, also when
    /// loading into a `MemoryEnv` or another `Environment` via `load_into`.
    pub fn respect_disable_var(mut self, respect: bool) -> Self {
        self.respect_disable_var = respect;
        self
    }

    /// Files this loader will read, with the default applied.
    pub fn files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from(DEFAULT_ENV_FILE)]
        } else {
            self.files.clone()
        }
    }

    /// Check if loading is disabled via environment variable.
    fn disabled(&self) -> bool {
        self.respect_disable_var
            && matches!(
                std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
                Some("true") | Some("1")
            )
    }

    /// Load every file into the process environment.
    ///
    /// See `ProcessEnv` for the threading contract.
    pub fn load(&self) -> Result<LoadReport, LoadError> {
        self.load_into(&mut ProcessEnv)
    }

    /// Load every file into `env`.
    ///
    /// # Errors
    ///
    /// Returns the first failure; files after it are not touched:
    /// - `LoadError::Open` if a file cannot be opened
    /// - `LoadError::Parse` if a file has invalid syntax
    /// - `LoadError::Set` if `env` rejects a variable; nothing from that file
    ///   is applied
    pub fn load_into<E: Environment + ?Sized>(&self, env: &mut E) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport::default();
        if self.disabled() {
            tracing::debug!(var = DOTENV_DISABLED_VAR, "Env file loading disabled");
            return Ok(report);
        }

        for path in self.files() {
            let vars = match read_file(&path) {
                Ok(vars) => vars,
                Err(LoadError::Open { source, .. })
                    if self.ignore_missing && source.kind() == ErrorKind::NotFound =>
                {
                    tracing::debug!(path = %path.display(), "Env file not found; skipping");
                    report.files_missing += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            apply(env, &path, &vars, &mut report)?;
        }

        Ok(report)
    }
}

/// Parse a single env file without touching any environment.
///
/// # Errors
///
/// `LoadError::Open` if the file cannot be opened, `LoadError::Parse` if its
/// contents are invalid.
pub fn read_file(path: impl AsRef<Path>) -> Result<EnvMap, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse(file).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply<E: Environment + ?Sized>(
    env: &mut E,
    path: &Path,
    vars: &EnvMap,
    report: &mut LoadReport,
) -> Result<(), LoadError> {
    // Reject the whole file before the first write so a bad pair applies nothing.
    for (key, value) in vars {
        env.check(key, value).map_err(|source| LoadError::Set {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let mut set = 0;
    let mut skipped = 0;
    for (key, value) in vars {
        let written = env
            .set_if_absent(key, value)
            .map_err(|source| LoadError::Set {
                path: path.to_path_buf(),
                source,
            })?;
        if written {
            set += 1;
        } else {
            tracing::trace!(key = %key, "Variable already set; keeping existing value");
            skipped += 1;
        }
    }

    report.files_read += 1;
    report.variables_set += set;
    report.variables_skipped += skipped;
    tracing::debug!(
        path = %path.display(),
        variables = set,
        skipped,
        "Loaded env file"
    );
    Ok(())
}
