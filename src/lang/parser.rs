//! Line-level parsing of the `.lang` format.
//!
//! Every line is handled independently: tabs are deleted, the first `=`
//! splits key from value, spaces are deleted from the key, a `#` starts a
//! comment running to the end of the line, and trailing spaces are stripped
//! from the value. Lines that end up without a `=`, a key or a value are
//! skipped silently.

use std::collections::HashMap;
use std::path::Path;

/// Parse a single logical line into a key/value pair.
///
/// Returns `None` for blank, comment-only and malformed lines. This one
/// routine serves both string- and file-sourced input, so the two entry
/// points cannot drift apart in how they treat a line with no `=`.
pub(crate) fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.replace('\t', "");
    let (lhs, rhs) = line.split_once('=')?;

    let key = lhs.replace(' ', "");
    let rhs = rhs.split('#').next().unwrap_or("");
    let value = rhs.trim_end_matches(' ');

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value.to_string()))
}

/// Parse raw text into a key/value mapping.
///
/// Lines are split on `\n` or `\r`, so CRLF input works without special
/// casing. A key occurring on several lines keeps the last value.
pub(crate) fn parse_text(text: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for line in text.split(['\n', '\r']) {
        if line.is_empty() {
            continue;
        }
        if let Some((key, value)) = parse_line(line) {
            entries.insert(key, value);
        }
    }
    entries
}

/// Parse a file into a key/value mapping.
///
/// An unreadable file yields an empty mapping rather than an error; the
/// failure is only logged.
pub(crate) fn parse_path(path: &Path) -> HashMap<String, String> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_text(&text),
        Err(e) => {
            tracing::warn!("Failed to read language file {:?}: {}", path, e);
            HashMap::new()
        }
    }
}
