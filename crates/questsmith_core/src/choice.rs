//! Labeled edges between quest nodes.

use crate::sanitize;
use derive_getters::Getters;

/// Anchor of the overview section.
pub const TOP_ANCHOR: &str = "top";
/// Anchor of the closing section.
pub const END_ANCHOR: &str = "end";
/// Anchors that exist in every rendered document regardless of the nodes.
pub const RESERVED_ANCHORS: [&str; 2] = [TOP_ANCHOR, END_ANCHOR];

/// Returns true if `id` names the overview or closing section.
pub fn is_reserved_anchor(id: &str) -> bool {
    RESERVED_ANCHORS.contains(&id)
}

/// One outgoing edge from a node.
///
/// The target is always a sanitized identifier. It may name a node that does
/// not exist (yet); such dangling edges are flagged when rendering.
///
/// # Examples
///
/// ```
/// use questsmith_core::Choice;
///
/// let choice = Choice::new("Open the Gate", "Gate Room");
/// assert_eq!(choice.label(), "Open the Gate");
/// assert_eq!(choice.target(), "gate-room");
///
/// assert_eq!(Choice::new("Back", "   ").target(), "top");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Choice {
    /// Text shown for the choice
    label: String,
    /// Anchor the choice leads to
    target: String,
}

impl Choice {
    /// Creates a choice, sanitizing the target. A blank target points at the overview.
    pub fn new(label: impl Into<String>, target: impl AsRef<str>) -> Self {
        let target = target.as_ref();
        let target = if target.trim().is_empty() {
            TOP_ANCHOR.to_string()
        } else {
            sanitize(target)
        };
        Self {
            label: label.into(),
            target,
        }
    }

    /// Parses the `Label=target` shorthand used by batch front ends.
    ///
    /// Splits on the last `=`, so labels may contain `=` themselves. Without a
    /// separator the whole text is the label and the target is the overview.
    pub fn parse_shorthand(spec: &str) -> Self {
        match spec.rsplit_once('=') {
            Some((label, target)) => Self::new(label.trim(), target),
            None => Self::new(spec.trim(), ""),
        }
    }

    pub(crate) fn retarget(&mut self, target: &str) {
        self.target = target.to_string();
    }
}
