//! JavaScript string literal quoting.

/// Quote `s` as a single-quoted JavaScript string literal.
pub fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quote `s` as a double-quoted literal, escaped the way JSON is.
pub fn double_quoted(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
