//! Descriptive quest metadata.

use derive_getters::Getters;
use derive_setters::Setters;

/// Free-text fields describing the quest as a whole.
///
/// No field references a node and none carries an invariant.
///
/// # Examples
///
/// ```
/// use questsmith_core::QuestMeta;
///
/// let meta = QuestMeta::empty().with_quest_name("Ardea").with_region("Marsh");
/// assert_eq!(meta.quest_name(), "Ardea");
/// assert!(meta.rewards().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Setters)]
#[setters(prefix = "with_", into)]
pub struct QuestMeta {
    /// Display name of the quest
    quest_name: String,
    /// Region or location where the quest takes place
    region: String,
    /// One-paragraph description shown at the top of the overview
    short_description: String,
    /// Character who hands out the quest
    quest_giver: String,
    /// What must be done before the quest becomes available
    prerequisite: String,
    /// Quest category (main, side, ...)
    quest_type: String,
    /// Short summary listed with the other metadata
    meta_short: String,
    /// Rewards granted on completion
    rewards: String,
    /// World flags the quest reads or sets
    important_flags: String,
    /// Explicit version or date stamp for exports
    version_stamp: String,
}

impl QuestMeta {
    /// Metadata with every field empty.
    pub fn empty() -> Self {
        Self {
            quest_name: String::new(),
            region: String::new(),
            short_description: String::new(),
            quest_giver: String::new(),
            prerequisite: String::new(),
            quest_type: String::new(),
            meta_short: String::new(),
            rewards: String::new(),
            important_flags: String::new(),
            version_stamp: String::new(),
        }
    }
}

impl Default for QuestMeta {
    /// Placeholder metadata for a freshly created project.
    fn default() -> Self {
        Self::empty()
            .with_quest_name("New Quest")
            .with_region("Unknown")
            .with_short_description("Short description here...")
    }
}
