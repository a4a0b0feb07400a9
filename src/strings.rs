//! String helpers.

use crate::constants::{BACKSLASH, SLASH};

/// Returns `true` if `s` is non-empty.
#[must_use]
pub fn has_length(s: &str) -> bool {
    !s.is_empty()
}

/// Returns `true` if `s` contains at least one non-whitespace character.
#[must_use]
pub fn has_text(s: &str) -> bool {
    s.chars().any(|c| !c.is_whitespace())
}

/// Joins the values that have text with `delimiter`.
///
/// Blank values are skipped. Returns `None` when `delimiter` is empty.
#[must_use]
pub fn concat<S: AsRef<str>>(delimiter: &str, values: &[S]) -> Option<String> {
    if !has_length(delimiter) {
        return None;
    }
    let parts: Vec<&str> = values.iter().map(AsRef::as_ref).filter(|v| has_text(v)).collect();
    Some(parts.join(delimiter))
}

/// Removes every leading occurrence of `c`.
#[must_use]
pub fn trim_leading_char(s: &str, c: char) -> &str {
    s.trim_start_matches(c)
}

/// Removes every trailing occurrence of `c`.
#[must_use]
pub fn trim_trailing_char(s: &str, c: char) -> &str {
    s.trim_end_matches(c)
}

/// Removes leading whitespace.
#[must_use]
pub fn trim_leading_whitespace(s: &str) -> &str {
    s.trim_start()
}

/// Removes trailing whitespace.
#[must_use]
pub fn trim_trailing_whitespace(s: &str) -> &str {
    s.trim_end()
}

/// Normalizes a path: backslashes become `/`, `.` segments are dropped and
/// `..` segments cancel the preceding segment.
///
/// A `scheme:` prefix (`file:`, `C:`) and a leading `/` are kept. Leading
/// `..` segments that cannot be resolved are kept.
#[must_use]
pub fn clean_path(path: &str) -> String {
    let normalized = path.replace(BACKSLASH, SLASH);

    let (prefix, rest) = match normalized.find(':') {
        Some(idx) if !normalized[..idx].contains('/') => normalized.split_at(idx + 1),
        _ => ("", normalized.as_str()),
    };
    let (root, rest) = match rest.strip_prefix('/') {
        Some(stripped) => ("/", stripped),
        None => ("", rest),
    };

    let mut segments: Vec<&str> = Vec::new();
    let mut unresolved = 0usize;
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    unresolved += 1;
                }
            }
            other => segments.push(other),
        }
    }

    let mut parts: Vec<&str> = std::iter::repeat("..").take(unresolved).collect();
    parts.extend(segments);
    let trailing = if rest.ends_with('/') && !parts.is_empty() { SLASH } else { "" };
    format!("{prefix}{root}{}{trailing}", parts.join(SLASH))
}
