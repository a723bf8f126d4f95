//! Command-line interface module.
//!
//! Each command loads the project, applies one model operation and saves it
//! again. A failed operation leaves the file untouched.

mod check;
mod commands;
mod export;
mod meta;
mod node;

pub use check::handle_check;
pub use commands::{Cli, Commands, EditNodeArgs, OutputFormat, SetMetaArgs};
pub use export::{ExportOverrides, handle_convert, handle_export};
pub use meta::{handle_new, handle_set_meta, handle_show, outline};
pub use node::{
    handle_add_choice, handle_add_node, handle_edit_node, handle_move_node, handle_remove_choice,
    handle_remove_node, handle_rename_node, handle_set_choices,
};

use crate::{QuestsmithConfig, load_project, save_project};
use questsmith_core::QuestGraph;
use std::path::Path;
use std::process::ExitCode;

/// Loads the project, applies `edit` and saves the result.
///
/// Nothing is written when `edit` fails.
pub fn edit_project<F>(project: &Path, edit: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut QuestGraph) -> anyhow::Result<()>,
{
    let mut graph = load_project(project)?;
    edit(&mut graph)?;
    save_project(project, &graph)?;
    Ok(())
}

/// Dispatches a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = QuestsmithConfig::load(cli.config.as_deref())?;
    let project = cli.project.as_path();

    match cli.command {
        Commands::New { name, force } => handle_new(project, name.as_deref(), force)?,
        Commands::Show { format } => handle_show(project, format)?,
        Commands::AddNode { after } => handle_add_node(project, &config.nodes, after.as_deref())?,
        Commands::RemoveNode { id } => handle_remove_node(project, &id)?,
        Commands::RenameNode {
            id,
            new_id,
            from_title,
            relink,
        } => handle_rename_node(project, &id, new_id.as_deref(), from_title, relink)?,
        Commands::MoveNode { id, direction } => handle_move_node(project, &id, direction)?,
        Commands::EditNode(args) => handle_edit_node(project, args)?,
        Commands::SetChoices { id, choices } => handle_set_choices(project, &id, &choices)?,
        Commands::AddChoice { id, label, target } => {
            handle_add_choice(project, &id, &label, &target)?
        }
        Commands::RemoveChoice { id, index } => handle_remove_choice(project, &id, index)?,
        Commands::SetMeta(args) => handle_set_meta(project, args)?,
        Commands::Check { format } => {
            if !handle_check(project, format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Export {
            output,
            no_scripting,
            stamp,
            locale,
        } => handle_export(
            project,
            &config,
            ExportOverrides {
                output,
                no_scripting,
                stamp,
                locale,
            },
        )?,
        Commands::Convert { input, output } => handle_convert(&input, &output)?,
    }

    Ok(ExitCode::SUCCESS)
}
