//! Project file I/O.
//!
//! These are the only functions in the workspace that touch the file system
//! on behalf of a quest: the graph, codec and renderer stay pure.

use questsmith_codec::{Format, decode_as, encode_as};
use questsmith_core::QuestGraph;
use questsmith_error::{FileError, QuestsmithResult};
use questsmith_render::{RenderOptions, export};
use std::path::Path;
use tracing::{info, instrument};

/// Reads and decodes a project. `.toml` files are TOML, everything else JSON.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_project(path: &Path) -> QuestsmithResult<QuestGraph> {
    let text = std::fs::read_to_string(path).map_err(|e| FileError::read(path.display(), e))?;
    let graph = decode_as(&text, Format::from_path(path))?;
    info!(nodes = graph.len(), "Loaded project");
    Ok(graph)
}

/// Encodes and writes a project in the format implied by its extension.
#[instrument(skip_all, fields(path = %path.display(), nodes = graph.len()))]
pub fn save_project(path: &Path, graph: &QuestGraph) -> QuestsmithResult<()> {
    let text = encode_as(graph, Format::from_path(path))?;
    write_file(path, &text)?;
    info!("Saved project");
    Ok(())
}

/// Exports the graph as HTML to `path`.
///
/// Nothing is written when the export is withheld because of duplicate ids.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn export_html(path: &Path, graph: &QuestGraph, options: &RenderOptions) -> QuestsmithResult<()> {
    let html = export(graph, options)?;
    write_file(path, &html)?;
    info!(bytes = html.len(), "Exported document");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), FileError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FileError::write(parent.display(), e))?;
    }
    std::fs::write(path, contents).map_err(|e| FileError::write(path.display(), e))
}
