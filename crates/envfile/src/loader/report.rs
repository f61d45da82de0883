//! Load summary returned by every loader entry point.
//!
//! Responsibilities:
//! - Count files read or skipped and variables set or kept.
//!
//! Does NOT handle:
//! - Recording keys or values; only counts leave the loader.
//!
//! Invariants:
//! - A file that fails to load contributes nothing to the counts.

/// Summary of a load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Files opened and parsed.
    pub files_read: usize,
    /// Files skipped because they did not exist (only with `ignore_missing`).
    pub files_missing: usize,
    /// Variables written to the environment.
    pub variables_set: usize,
    /// Variables left alone because the environment already had them.
    pub variables_skipped: usize,
}
