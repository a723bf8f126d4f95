//! Records of the persisted project document.
//!
//! Field names are the interchange contract. Every field is optional on
//! read: missing keys and explicit `null`s decode to the empty value.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level project document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// Quest metadata
    #[serde(default, deserialize_with = "nullable")]
    pub meta: MetaRecord,
    /// Nodes in reading order
    #[serde(default, deserialize_with = "nullable")]
    pub nodes: Vec<NodeRecord>,
}

/// Flat quest metadata record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub quest_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub region: String,
    #[serde(default, deserialize_with = "nullable")]
    pub short_description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub quest_giver: String,
    #[serde(default, deserialize_with = "nullable")]
    pub prerequisite: String,
    #[serde(default, deserialize_with = "nullable")]
    pub quest_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub meta_short: String,
    #[serde(default, deserialize_with = "nullable")]
    pub rewards: String,
    #[serde(default, deserialize_with = "nullable")]
    pub important_flags: String,
    #[serde(default, deserialize_with = "nullable")]
    pub version_stamp: String,
}

/// One node record.
///
/// `node_id` and `options` are read as aliases for documents written by
/// earlier editors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default, alias = "node_id", deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub scene: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dialog: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default, deserialize_with = "nullable")]
    pub info_items: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub tech_flags: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub outcomes: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: String,
    #[serde(default, alias = "options", deserialize_with = "nullable")]
    pub choices: Vec<ChoiceRecord>,
}

/// One choice record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub target: String,
}

/// Treats an explicit `null` like a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
