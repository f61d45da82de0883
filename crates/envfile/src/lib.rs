//! Minimal `KEY=VALUE` env file loading.
//!
//! This crate parses dotenv-style files into a mapping and loads them into the
//! process environment without overriding variables that are already set.
//!
//! ```no_run
//! fn main() -> Result<(), envfile::LoadError> {
//!     // Reads `.env` from the current directory.
//!     envfile::load_default()?;
//!     Ok(())
//! }
//! ```
//!
//! Call the loaders once, at the very start of `main`: the process
//! environment is global state and is written without locking.

pub mod constants;
mod loader;
mod parser;

pub use constants::{DEFAULT_ENV_FILE, DOTENV_DISABLED_VAR, EXPORT_PREFIX};
pub use loader::{
    EnvLoader, Environment, EnvironmentSetError, LoadError, LoadReport, MemoryEnv, ProcessEnv,
    load, load_default, load_into, read_file,
};
pub use parser::{EnvMap, ParseError, marshal, parse, unmarshal};
