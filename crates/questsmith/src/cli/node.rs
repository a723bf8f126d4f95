//! Node and choice command handlers.

use super::{EditNodeArgs, edit_project};
use anyhow::{Context, bail};
use questsmith_core::{Choice, Direction, NodeDefaults, lines_to_list, suggest_id};
use std::path::Path;
use tracing::info;

/// Handles `add-node`.
#[tracing::instrument(skip_all)]
pub fn handle_add_node(project: &Path, defaults: &NodeDefaults, after: Option<&str>) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        let after = match after {
            Some(id) => Some(graph.position(id).with_context(|| format!("Unknown node '{}'", id))?),
            None => None,
        };
        let id = graph.add_node(defaults, after).id().clone();
        println!("Added node '{}'", id);
        Ok(())
    })
}

/// Handles `remove-node`.
#[tracing::instrument(skip(project))]
pub fn handle_remove_node(project: &Path, id: &str) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        graph.remove_node(id)?;
        let dangling = graph
            .dangling_targets()
            .into_iter()
            .filter(|dangling| dangling.target() == id)
            .count();
        if dangling > 0 {
            info!(dangling, "Choices now point at the removed node");
        }
        println!("Removed node '{}'", id);
        Ok(())
    })
}

/// Handles `rename-node`.
#[tracing::instrument(skip(project))]
pub fn handle_rename_node(
    project: &Path,
    id: &str,
    new_id: Option<&str>,
    from_title: bool,
    relink: bool,
) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        let requested = if from_title {
            suggest_id(graph.node(id)?.title())
        } else {
            match new_id {
                Some(new_id) => new_id.to_string(),
                None => bail!("A new id or --from-title is required"),
            }
        };

        if relink {
            let (renamed, relinked) = graph.rename_and_relink(id, &requested)?;
            println!("Renamed '{}' to '{}', relinked {} choice(s)", id, renamed, relinked);
        } else {
            let renamed = graph.rename_node(id, &requested)?;
            println!("Renamed '{}' to '{}'", id, renamed);
        }
        Ok(())
    })
}

/// Handles `move-node`.
#[tracing::instrument(skip(project))]
pub fn handle_move_node(project: &Path, id: &str, direction: Direction) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        let position = graph.move_node(id, direction)?;
        println!("Node '{}' is now at position {}", id, position + 1);
        Ok(())
    })
}

/// Handles `edit-node`.
#[tracing::instrument(skip_all, fields(id = %args.id))]
pub fn handle_edit_node(project: &Path, args: EditNodeArgs) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        let node = graph.node_mut(&args.id)?;
        if let Some(title) = args.title {
            node.set_title(title);
        }
        if let Some(scene) = args.scene {
            node.set_scene(scene);
        }
        if let Some(dialog) = args.dialog {
            node.set_dialog(dialog);
        }
        if let Some(content) = args.content {
            node.set_content(content);
        }
        if let Some(info) = args.info {
            node.set_info_items(lines_to_list(&info));
        }
        if let Some(tech) = args.tech {
            node.set_tech_flags(lines_to_list(&tech));
        }
        if let Some(outcomes) = args.outcomes {
            node.set_outcomes(lines_to_list(&outcomes));
        }
        if let Some(notes) = args.notes {
            node.set_notes(notes);
        }
        println!("Updated node '{}'", args.id);
        Ok(())
    })
}

/// Handles `set-choices`.
#[tracing::instrument(skip(project))]
pub fn handle_set_choices(project: &Path, id: &str, specs: &[String]) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        let choices: Vec<Choice> = specs.iter().map(|spec| Choice::parse_shorthand(spec)).collect();
        let count = choices.len();
        graph.set_choices(id, choices)?;
        println!("Node '{}' now has {} choice(s)", id, count);
        Ok(())
    })
}

/// Handles `add-choice`.
#[tracing::instrument(skip(project))]
pub fn handle_add_choice(project: &Path, id: &str, label: &str, target: &str) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        let choice = Choice::new(label, target);
        let summary = format!("'{}' -> '{}'", choice.label(), choice.target());
        graph.push_choice(id, choice)?;
        println!("Added choice {}", summary);
        Ok(())
    })
}

/// Handles `remove-choice`. `index` is 1-based.
#[tracing::instrument(skip(project))]
pub fn handle_remove_choice(project: &Path, id: &str, index: usize) -> anyhow::Result<()> {
    let Some(zero_based) = index.checked_sub(1) else {
        bail!("Choice positions start at 1");
    };
    edit_project(project, |graph| {
        let removed = graph.remove_choice(id, zero_based)?;
        println!("Removed choice '{}' -> '{}'", removed.label(), removed.target());
        Ok(())
    })
}
