//! Project-level command handlers.

use super::{OutputFormat, SetMetaArgs, edit_project};
use crate::{load_project, save_project};
use anyhow::bail;
use questsmith_core::{QuestGraph, QuestMeta};
use std::path::Path;

/// Handles `new`.
#[tracing::instrument(skip(project))]
pub fn handle_new(project: &Path, name: Option<&str>, force: bool) -> anyhow::Result<()> {
    if project.exists() && !force {
        bail!(
            "'{}' already exists; pass --force to overwrite it",
            project.display()
        );
    }
    let mut meta = QuestMeta::default();
    if let Some(name) = name {
        meta = meta.with_quest_name(name);
    }
    save_project(project, &QuestGraph::new(meta))?;
    println!("Created {}", project.display());
    Ok(())
}

/// Handles `show`.
#[tracing::instrument(skip(project))]
pub fn handle_show(project: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let graph = load_project(project)?;
    match format {
        OutputFormat::Human => print!("{}", outline(&graph)),
        OutputFormat::Json => println!("{}", questsmith_codec::encode(&graph)?),
    }
    Ok(())
}

/// Handles `set-meta`. Only the given fields change.
#[tracing::instrument(skip_all)]
pub fn handle_set_meta(project: &Path, args: SetMetaArgs) -> anyhow::Result<()> {
    edit_project(project, |graph| {
        let mut meta = graph.meta().clone();
        if let Some(value) = args.quest_name {
            meta = meta.with_quest_name(value);
        }
        if let Some(value) = args.region {
            meta = meta.with_region(value);
        }
        if let Some(value) = args.short_description {
            meta = meta.with_short_description(value);
        }
        if let Some(value) = args.quest_giver {
            meta = meta.with_quest_giver(value);
        }
        if let Some(value) = args.prerequisite {
            meta = meta.with_prerequisite(value);
        }
        if let Some(value) = args.quest_type {
            meta = meta.with_quest_type(value);
        }
        if let Some(value) = args.summary {
            meta = meta.with_meta_short(value);
        }
        if let Some(value) = args.rewards {
            meta = meta.with_rewards(value);
        }
        if let Some(value) = args.important_flags {
            meta = meta.with_important_flags(value);
        }
        if let Some(value) = args.version_stamp {
            meta = meta.with_version_stamp(value);
        }
        graph.set_meta(meta);
        println!("Updated quest metadata");
        Ok(())
    })
}

/// Numbered outline of nodes and their choices.
pub fn outline(graph: &QuestGraph) -> String {
    let meta = graph.meta();
    let mut out = format!("Quest: {}", meta.quest_name());
    if !meta.region().trim().is_empty() {
        out.push_str(&format!(" ({})", meta.region()));
    }
    out.push('\n');

    for (i, node) in graph.nodes().iter().enumerate() {
        out.push_str(&format!("{:>3}. {}  {}\n", i + 1, node.id(), node.display_title()));
        if node.choices().is_empty() {
            out.push_str("       (no choices)\n");
        }
        for (j, choice) in node.choices().iter().enumerate() {
            let marker = if graph.is_known_target(choice.target()) {
                ""
            } else {
                "  [unknown target]"
            };
            out.push_str(&format!(
                "       {}. {} -> {}{}\n",
                j + 1,
                choice.label(),
                choice.target(),
                marker
            ));
        }
    }
    out
}
