//! Conversion between newline-delimited text and ordered line lists.
//!
//! Multi-line form fields map onto list fields of a [`Node`](crate::Node).
//! Lines are trimmed and blank lines are dropped, so the conversion is only
//! lossless for lists that are already trimmed and non-blank.

/// Splits text into trimmed, non-empty lines.
///
/// # Examples
///
/// ```
/// use questsmith_core::lines_to_list;
///
/// let items = lines_to_list("  first \n\n second\r\n   \n");
/// assert_eq!(items, vec!["first".to_string(), "second".to_string()]);
/// ```
pub fn lines_to_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins list items with newlines.
pub fn list_to_lines(items: &[String]) -> String {
    items.join("\n")
}
