//! Check command handler.

use super::OutputFormat;
use crate::load_project;
use questsmith_core::{QuestGraph, is_reserved_anchor};
use serde_json::json;
use std::path::Path;

/// Handles `check`.
///
/// Returns `false` when node ids collide and the project cannot be exported.
/// Dangling choice targets are reported as warnings only.
#[tracing::instrument(skip_all, fields(path = %project.display()))]
pub fn handle_check(project: &Path, format: OutputFormat) -> anyhow::Result<bool> {
    tracing::info!("Checking project");
    let graph = load_project(project)?;
    let exportable = graph.anchor_collisions().is_empty();

    match format {
        OutputFormat::Human => output_human(project, &graph),
        OutputFormat::Json => output_json(project, &graph)?,
    }
    Ok(exportable)
}

/// Outputs the report in human-readable format.
fn output_human(path: &Path, graph: &QuestGraph) {
    let duplicates = graph.anchor_collisions();
    let dangling = graph.dangling_targets();

    let status_icon = if !duplicates.is_empty() {
        "❌"
    } else if !dangling.is_empty() {
        "⚠️"
    } else {
        "✅"
    };

    println!("\n{} {}", status_icon, path.display());
    println!("{}", "─".repeat(80));

    if !duplicates.is_empty() {
        println!("\nErrors:");
        for (i, id) in duplicates.iter().enumerate() {
            if is_reserved_anchor(id) {
                println!("\n  {}. Node id '{}' is reserved for the document", i + 1, id);
            } else {
                println!("\n  {}. Node id '{}' is used more than once", i + 1, id);
            }
        }
        println!("\n     💡 Rename one of the nodes before exporting.");
    }

    if !dangling.is_empty() {
        println!("\nWarnings:");
        for (i, entry) in dangling.iter().enumerate() {
            println!(
                "\n  {}. Choice {} of '{}' points at unknown node '{}'",
                i + 1,
                entry.choice_index() + 1,
                entry.node_id(),
                entry.target()
            );
        }
    }

    if duplicates.is_empty() && dangling.is_empty() {
        println!("\n  No issues found");
    }
}

/// Outputs the report in JSON format.
fn output_json(path: &Path, graph: &QuestGraph) -> anyhow::Result<()> {
    let duplicates = graph.duplicate_ids();
    let reserved: Vec<&String> = graph
        .nodes()
        .iter()
        .map(|node| node.id())
        .filter(|id| is_reserved_anchor(id))
        .collect();
    let dangling: Vec<serde_json::Value> = graph
        .dangling_targets()
        .iter()
        .map(|entry| {
            json!({
                "node": entry.node_id(),
                "choice": entry.choice_index() + 1,
                "target": entry.target(),
            })
        })
        .collect();

    let output = json!({
        "valid": duplicates.is_empty() && reserved.is_empty(),
        "file": path.display().to_string(),
        "nodes": graph.len(),
        "duplicate_ids": duplicates,
        "reserved_ids": reserved,
        "dangling_targets": dangling,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
