//! Line-oriented parser for `KEY=VALUE` env files.
//!
//! Responsibilities:
//! - Turn any readable text stream into an `EnvMap`.
//! - Apply the per-line rules in `line.rs` and annotate failures with line numbers.
//! - Serialize a mapping back into parseable text (`marshal`).
//!
//! Does NOT handle:
//! - Opening files or touching the environment (see `loader`).
//! - Interpolation, quoting, escapes or multi-line values.
//!
//! Invariants:
//! - Parsing is all-or-nothing: the first bad line aborts and discards every
//!   pair collected so far.
//! - Later duplicate keys overwrite earlier ones.

mod error;
mod line;
mod marshal;

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

pub use error::ParseError;
pub use marshal::marshal;

use line::parse_line;

/// Parsed env file contents, keyed by variable name.
pub type EnvMap = HashMap<String, String>;

/// Parse env declarations from a reader.
///
/// # Errors
///
/// - `ParseError::NoSeparator` for a line without `=` or `:`
/// - `ParseError::InvalidPair` for a line whose key or value ends up empty
/// - `ParseError::Read` if the reader fails or yields invalid UTF-8
pub fn parse<R: Read>(reader: R) -> Result<EnvMap, ParseError> {
    let mut out = EnvMap::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = index + 1;
        let raw = line.map_err(|e| ParseError::Read {
            line: line_no,
            kind: e.kind(),
        })?;
        if let Some((key, value)) = parse_line(&raw, line_no)? {
            out.insert(key.to_string(), value.to_string());
        }
    }
    Ok(out)
}

/// Parse env declarations held in a string.
pub fn unmarshal(text: &str) -> Result<EnvMap, ParseError> {
    parse(text.as_bytes())
}
