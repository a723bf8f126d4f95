//! Markup escaping.

/// Escapes `&`, `<` and `>`. Everything else, whitespace included, passes through.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaped, trimmed text, or the em-dash placeholder when blank.
pub(crate) fn or_dash(value: &str) -> String {
    match value.trim() {
        "" => "\u{2014}".to_string(),
        trimmed => escape_html(trimmed),
    }
}
