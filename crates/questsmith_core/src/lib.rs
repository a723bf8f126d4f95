//! Quest graph data model for Questsmith.
//!
//! A quest is a [`QuestGraph`]: descriptive [`QuestMeta`] plus an ordered list
//! of [`Node`]s, each carrying labeled [`Choice`]s that point at other nodes
//! by anchor id. Ids are normalized by [`sanitize`] and kept unique by the
//! graph's mutation methods.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod choice;
mod defaults;
mod graph;
mod lines;
mod meta;
mod node;
mod sanitize;

pub use choice::{Choice, END_ANCHOR, RESERVED_ANCHORS, TOP_ANCHOR, is_reserved_anchor};
pub use defaults::{Direction, NodeDefaults, NodeDefaultsBuilder, NodeDefaultsBuilderError};
pub use graph::{DanglingTarget, QuestGraph, START_ID};
pub use lines::{lines_to_list, list_to_lines};
pub use meta::QuestMeta;
pub use node::Node;
pub use sanitize::{FALLBACK_ID, is_valid_id, sanitize, suggest_id};
