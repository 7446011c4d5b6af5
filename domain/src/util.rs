//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of user text for log lines.
///
/// Newlines are folded to spaces and the result is cut at `max_bytes`
/// with a trailing `...` when shortened.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let folded = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if folded.len() <= max_bytes {
        folded
    } else {
        format!("{}...", truncate_str(&folded, max_bytes))
    }
}
