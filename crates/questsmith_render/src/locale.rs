//! Fixed label sets for the rendered document.

use serde::{Deserialize, Serialize};

/// Language of the labels the renderer adds around author content.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    /// English labels
    #[default]
    #[strum(serialize = "en")]
    #[serde(rename = "en")]
    English,
    /// German labels
    #[strum(serialize = "de")]
    #[serde(rename = "de")]
    German,
}

impl Locale {
    /// Label set for this locale.
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::German => &GERMAN,
        }
    }
}

/// Every piece of fixed text the renderer emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Value of the `lang` attribute
    pub lang: &'static str,
    /// Prefix of the `<title>` and the footer
    pub presenter: &'static str,
    /// Prefix of the main heading
    pub quest: &'static str,
    /// Accessible name of the navigation list
    pub navigation: &'static str,
    /// Heading and navigation label of the overview
    pub overview: &'static str,
    /// Badge shown on the addressed section
    pub active_node: &'static str,
    /// Metadata list heading
    pub metadata: &'static str,
    /// Metadata field labels
    pub quest_name: &'static str,
    /// Region label (header and metadata list)
    pub region: &'static str,
    /// Short description label
    pub short_description: &'static str,
    /// Quest giver label
    pub quest_giver: &'static str,
    /// Prerequisite label
    pub prerequisite: &'static str,
    /// Quest type label
    pub quest_type: &'static str,
    /// Summary label
    pub summary: &'static str,
    /// Rewards label
    pub rewards: &'static str,
    /// Important flags label
    pub important_flags: &'static str,
    /// Version label (metadata list and footer)
    pub version: &'static str,
    /// Link from the overview to the first node
    pub to_start: &'static str,
    /// Node sub-block labels
    pub scene: &'static str,
    /// Content line label
    pub content: &'static str,
    /// Dialog block label
    pub dialog: &'static str,
    /// Important information list label
    pub info_items: &'static str,
    /// Technical flags summary
    pub tech_flags: &'static str,
    /// Outcomes summary
    pub outcomes: &'static str,
    /// Choice list heading
    pub choices: &'static str,
    /// Placeholder for a node without choices
    pub no_choices: &'static str,
    /// Placeholder for a blank choice label
    pub choice_placeholder: &'static str,
    /// Marker after a dangling choice
    pub unknown_target: &'static str,
    /// Notes label
    pub notes: &'static str,
    /// Link back to the overview
    pub back_to_overview: &'static str,
    /// Heading of the closing section
    pub end_title: &'static str,
    /// Body of the closing section
    pub end_body: &'static str,
}

static ENGLISH: Labels = Labels {
    lang: "en",
    presenter: "Quest Presenter",
    quest: "Quest",
    navigation: "Quest navigation",
    overview: "Overview",
    active_node: "Active node",
    metadata: "Quest metadata",
    quest_name: "Quest name",
    region: "Region",
    short_description: "Short description",
    quest_giver: "Quest giver",
    prerequisite: "Prerequisite",
    quest_type: "Type",
    summary: "Summary",
    rewards: "Rewards",
    important_flags: "Important flags",
    version: "Version",
    to_start: "\u{2192} To the start",
    scene: "Scene",
    content: "Content",
    dialog: "Dialog",
    info_items: "Important information",
    tech_flags: "Technical flags",
    outcomes: "Outcomes",
    choices: "Choices",
    no_choices: "No choices.",
    choice_placeholder: "Choice",
    unknown_target: "(target unknown)",
    notes: "Notes",
    back_to_overview: "\u{2191} Back to overview",
    end_title: "End / Notes",
    end_body: "[Record here what the player learned, which world facts were set and what follows up.]",
};

static GERMAN: Labels = Labels {
    lang: "de",
    presenter: "Quest-Pr\u{e4}sentator",
    quest: "Quest",
    navigation: "Quest-Navigation",
    overview: "\u{dc}bersicht",
    active_node: "Aktiver Knoten",
    metadata: "Quest Metadaten",
    quest_name: "Questname",
    region: "Region",
    short_description: "Kurzbeschreibung",
    quest_giver: "Questgeber",
    prerequisite: "Voraussetzung",
    quest_type: "Art",
    summary: "Zusammenfassung",
    rewards: "Belohnungen",
    important_flags: "Wichtige Flags",
    version: "Stand",
    to_start: "\u{2192} Zum Start",
    scene: "Szene",
    content: "Inhalt",
    dialog: "Dialog",
    info_items: "Wichtige Information",
    tech_flags: "Technik/Flags",
    outcomes: "Enden/Outcomes",
    choices: "Optionen",
    no_choices: "Keine Optionen.",
    choice_placeholder: "Option",
    unknown_target: "(Ziel unbekannt)",
    notes: "Notizen",
    back_to_overview: "\u{2191} Zur \u{dc}bersicht",
    end_title: "Ende / Notizen",
    end_body: "[Hier festhalten, was der Spieler gelernt hat, welche Weltinfos gesetzt wurden und welche Follow-ups anstehen.]",
};
