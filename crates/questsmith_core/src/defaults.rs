//! Defaults applied when new nodes are created.

use crate::END_ANCHOR;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Template for nodes created by [`QuestGraph::add_node`](crate::QuestGraph::add_node).
///
/// A new node gets the id `{id_base}-{n}`, the title `{title_prefix} {n}`
/// and a single choice `choice_label -> choice_target`, where `n` is the
/// smallest positive number whose id is still free.
///
/// # Examples
///
/// ```
/// use questsmith_core::NodeDefaultsBuilder;
///
/// let defaults = NodeDefaultsBuilder::default()
///     .id_base("scene")
///     .title_prefix("Scene")
///     .build()
///     .unwrap();
/// assert_eq!(defaults.choice_target(), "end");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct NodeDefaults {
    /// Stem of generated ids
    id_base: String,
    /// Stem of generated titles
    title_prefix: String,
    /// Label of the placeholder choice
    choice_label: String,
    /// Target of the placeholder choice
    choice_target: String,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            id_base: "node".to_string(),
            title_prefix: "Node".to_string(),
            choice_label: "Continue".to_string(),
            choice_target: END_ANCHOR.to_string(),
        }
    }
}

/// Direction for moving a node within the reading order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start (`-1`)
    Up,
    /// Towards the end (`+1`)
    Down,
}

impl Direction {
    /// Signed step of the move.
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}
