//! Text escaping for the generated JavaScript config.

/// Escape text for use inside a single-quoted JavaScript string literal.
///
/// Backslashes are escaped first so an escaped quote cannot be undone by
/// a preceding backslash in the heading text. Line breaks are escaped too;
/// a raw newline would end the literal.
///
/// # Examples
/// ```
/// use tiku_splitter::nav::escape_js_string;
///
/// assert_eq!(escape_js_string("It's"), r"It\'s");
/// assert_eq!(escape_js_string(r"a\b"), r"a\\b");
/// ```
#[must_use]
pub fn escape_js_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
