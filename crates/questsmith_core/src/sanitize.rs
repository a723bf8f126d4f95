//! Anchor identifier normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Identifier used when nothing usable survives sanitization.
pub const FALLBACK_ID: &str = "node";

/// Letters spelled out as ASCII digraphs before the character filter runs.
const TRANSLITERATIONS: &[(char, &str)] = &[('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss")];

static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").expect("static pattern"));
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("static pattern"));

/// Normalizes free-form text into an anchor identifier matching `[a-z0-9_-]+`.
///
/// Total and idempotent: any input yields a non-empty identifier, and
/// sanitizing an identifier again leaves it unchanged.
///
/// # Examples
///
/// ```
/// use questsmith_core::sanitize;
///
/// assert_eq!(sanitize("  Die Brücke über den Fluß "), "die-bruecke-ueber-den-fluss");
/// assert_eq!(sanitize("?!"), "node");
/// assert_eq!(sanitize(&sanitize("Gate #2")), sanitize("Gate #2"));
/// ```
pub fn sanitize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut transliterated = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match TRANSLITERATIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => transliterated.push_str(to),
            None => transliterated.push(ch),
        }
    }

    let replaced = DISALLOWED_RUN.replace_all(&transliterated, "-");
    let collapsed = DASH_RUN.replace_all(&replaced, "-");
    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Suggests an anchor identifier for a node title.
pub fn suggest_id(title: &str) -> String {
    sanitize(title)
}

/// Returns true if `id` already has the sanitized shape.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}
