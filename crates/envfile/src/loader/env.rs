//! Environment abstraction the loader writes into.
//!
//! Responsibilities:
//! - Define the `Environment` trait with set-if-absent semantics.
//! - Provide `ProcessEnv` (the real process environment) and `MemoryEnv`
//!   (an in-memory fake for tests and dry runs).
//!
//! Does NOT handle:
//! - Parsing (see `parser`).
//! - Synchronization. The process environment is global and unlocked.
//!
//! Invariants:
//! - `set_if_absent` never overwrites an existing entry.
//! - `check` accepts exactly the pairs `set_if_absent` accepts.
//! - Both implementations reject the same malformed names and values.

use std::collections::HashMap;

use super::error::EnvironmentSetError;
use crate::parser::EnvMap;

/// Key/value store with "set if absent" writes.
pub trait Environment {
    /// Current value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `set_if_absent` would accept this pair, without writing it.
    fn check(&self, key: &str, value: &str) -> Result<(), EnvironmentSetError> {
        validate(key, value)
    }

    /// Set `key` to `value` unless `key` is already present.
    ///
    /// Returns `Ok(true)` if the value was written and `Ok(false)` if an
    /// existing entry was kept.
    fn set_if_absent(&mut self, key: &str, value: &str) -> Result<bool, EnvironmentSetError>;
}

/// Reject names and values the OS environment cannot represent.
fn validate(key: &str, value: &str) -> Result<(), EnvironmentSetError> {
    if key.is_empty() || key.contains(['=', '\0']) {
        return Err(EnvironmentSetError::InvalidKey {
            key: key.to_string(),
        });
    }
    if value.contains('\0') {
        return Err(EnvironmentSetError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// The real, process-wide environment.
///
/// Writing to it is only sound while no other thread reads or writes
/// environment variables. Load once, early in `main`, before spawning
/// threads or starting an async runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set_if_absent(&mut self, key: &str, value: &str) -> Result<bool, EnvironmentSetError> {
        validate(key, value)?;
        // var_os so that non-UTF-8 values still count as present
        if std::env::var_os(key).is_some() {
            return Ok(false);
        }
        // SAFETY: callers follow the load-early contract documented on
        // `ProcessEnv`, so no other thread touches the environment here.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(true)
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: EnvMap,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Consume the environment and return its variables.
    pub fn into_inner(self) -> EnvMap {
        self.vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<HashMap<_, _>>(),
        }
    }
}

impl Environment for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_if_absent(&mut self, key: &str, value: &str) -> Result<bool, EnvironmentSetError> {
        validate(key, value)?;
        if self.vars.contains_key(key) {
            return Ok(false);
        }
        self.vars.insert(key.to_string(), value.to_string());
        Ok(true)
    }
}
