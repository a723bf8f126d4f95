//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use questsmith_core::Direction;
use questsmith_render::Locale;
use std::path::PathBuf;

/// Questsmith: build branching quests and export them as HTML.
#[derive(Parser, Debug)]
#[command(name = "questsmith")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project file (`.json`, or `.toml` for TOML)
    #[arg(short, long, env = "QUESTSMITH_PROJECT", global = true, default_value = "quest.json")]
    pub project: PathBuf,

    /// Configuration file (overrides $QUESTSMITH_CONFIG and the platform default)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project with a single start node
    New {
        /// Quest name
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing project file
        #[arg(long)]
        force: bool,
    },

    /// Print the project outline
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Add a node built from the configured node defaults
    AddNode {
        /// Insert after this node instead of at the end
        #[arg(long)]
        after: Option<String>,
    },

    /// Remove a node; choices pointing at it are left dangling
    RemoveNode {
        /// Node id
        id: String,
    },

    /// Rename a node
    RenameNode {
        /// Current node id
        id: String,

        /// New id (sanitized before use)
        #[arg(required_unless_present = "from_title")]
        new_id: Option<String>,

        /// Derive the new id from the node's title
        #[arg(long, conflicts_with = "new_id")]
        from_title: bool,

        /// Also rewrite choices that targeted the old id
        #[arg(long)]
        relink: bool,
    },

    /// Move a node one step up or down in the reading order
    MoveNode {
        /// Node id
        id: String,

        /// `up` or `down`
        direction: Direction,
    },

    /// Edit the text fields of a node
    EditNode(EditNodeArgs),

    /// Replace all choices of a node
    SetChoices {
        /// Node id
        id: String,

        /// Choice as `Label=target`; repeat for several, omit to clear
        #[arg(long = "choice")]
        choices: Vec<String>,
    },

    /// Append a choice to a node
    AddChoice {
        /// Node id
        id: String,

        /// Link text
        label: String,

        /// Target node id, `top` or `end`
        target: String,
    },

    /// Remove a choice by its 1-based position
    RemoveChoice {
        /// Node id
        id: String,

        /// Position as listed by `show`
        index: usize,
    },

    /// Edit quest metadata
    SetMeta(SetMetaArgs),

    /// Report duplicate ids and dangling choice targets
    Check {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Export the quest as a self-contained HTML document
    Export {
        /// Output path (defaults to the project path with an `.html` extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out the navigation script
        #[arg(long)]
        no_scripting: bool,

        /// Footer stamp used when the quest has no version stamp
        #[arg(long)]
        stamp: Option<String>,

        /// Label language (`en` or `de`)
        #[arg(long)]
        locale: Option<Locale>,
    },

    /// Re-encode a project, e.g. from JSON to TOML
    Convert {
        /// Source project
        input: PathBuf,

        /// Destination project
        output: PathBuf,
    },
}

/// Field edits for `edit-node`. List fields take one item per line.
#[derive(Args, Debug, Default)]
pub struct EditNodeArgs {
    /// Node id
    pub id: String,

    /// Heading of the node
    #[arg(long)]
    pub title: Option<String>,

    /// Scene line
    #[arg(long)]
    pub scene: Option<String>,

    /// Dialog, kept verbatim
    #[arg(long)]
    pub dialog: Option<String>,

    /// Free-text content line
    #[arg(long)]
    pub content: Option<String>,

    /// Important information, one item per line
    #[arg(long)]
    pub info: Option<String>,

    /// Technical flags, one per line
    #[arg(long)]
    pub tech: Option<String>,

    /// Outcomes, one per line
    #[arg(long)]
    pub outcomes: Option<String>,

    /// Author notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// Metadata edits for `set-meta`.
#[derive(Args, Debug, Default)]
pub struct SetMetaArgs {
    /// Quest name
    #[arg(long)]
    pub quest_name: Option<String>,

    /// Region
    #[arg(long)]
    pub region: Option<String>,

    /// Short description shown in the overview
    #[arg(long)]
    pub short_description: Option<String>,

    /// Quest giver
    #[arg(long)]
    pub quest_giver: Option<String>,

    /// Prerequisite
    #[arg(long)]
    pub prerequisite: Option<String>,

    /// Quest type
    #[arg(long)]
    pub quest_type: Option<String>,

    /// Summary listed with the metadata
    #[arg(long)]
    pub summary: Option<String>,

    /// Rewards
    #[arg(long)]
    pub rewards: Option<String>,

    /// Important flags
    #[arg(long)]
    pub important_flags: Option<String>,

    /// Version stamp for exports
    #[arg(long)]
    pub version_stamp: Option<String>,
}

/// Output format for `show` and `check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Human,
    /// JSON
    Json,
}
