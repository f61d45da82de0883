//! Serialization of an `EnvMap` back into env file text.

use super::EnvMap;
use crate::constants::{COMMENT_CHAR, EXPORT_PREFIX, PRIMARY_SEPARATOR};

/// Render `map` as one `KEY=value` line per entry, sorted by key.
///
/// Keys that the parser would otherwise misread (a leading `#` or a leading
/// `export`) are written behind an `export ` prefix, so parsing the output
/// yields `map` again.
pub fn marshal(map: &EnvMap) -> String {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (key, value) in entries {
        if key.starts_with(COMMENT_CHAR) || key.starts_with(EXPORT_PREFIX) {
            out.push_str(EXPORT_PREFIX);
            out.push(' ');
        }
        out.push_str(key);
        out.push(PRIMARY_SEPARATOR);
        out.push_str(value);
        out.push('\n');
    }
    out
}
