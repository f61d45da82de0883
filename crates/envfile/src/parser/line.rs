//! Single-line rules: comment skipping, separator choice, `export` stripping,
//! inline comments and validation.

use super::error::ParseError;
use crate::constants::{COMMENT_CHAR, EXPORT_PREFIX, FALLBACK_SEPARATOR, PRIMARY_SEPARATOR};

/// Parse one raw line.
///
/// Returns `Ok(None)` for blank and full-line comment lines, and the trimmed
/// `(key, value)` pair otherwise. `line` is only used to annotate errors.
pub(crate) fn parse_line(raw: &str, line: usize) -> Result<Option<(&str, &str)>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_CHAR) {
        return Ok(None);
    }

    // Separators are resolved before any comment handling, so `KEY#value` has none.
    let (key, value) = trimmed
        .split_once(PRIMARY_SEPARATOR)
        .or_else(|| trimmed.split_once(FALLBACK_SEPARATOR))
        .ok_or(ParseError::NoSeparator { line })?;

    // No word boundary: `exportFOO=1` yields `FOO`.
    let key = key.strip_prefix(EXPORT_PREFIX).unwrap_or(key);
    let value = value
        .split_once(COMMENT_CHAR)
        .map_or(value, |(before, _)| before);

    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(ParseError::InvalidPair { line });
    }

    Ok(Some((key, value)))
}
