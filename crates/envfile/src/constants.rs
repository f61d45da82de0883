//! Centralized constants for the envfile crate.

/// File loaded when no filenames are given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment variable that disables loading when set to `1` or `true`.
///
/// Only consulted by loaders built with `respect_disable_var(true)`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Literal prefix stripped from keys (`export KEY=value`).
pub const EXPORT_PREFIX: &str = "export";

/// Character that starts a full-line or inline comment.
pub(crate) const COMMENT_CHAR: char = '#';

/// Preferred key/value separator.
pub(crate) const PRIMARY_SEPARATOR: char = '=';

/// Fallback separator, used only when the line has no `=`.
pub(crate) const FALLBACK_SEPARATOR: char = ':';
