//! Pre-export checks.

use crate::{RenderOptions, render};
use questsmith_core::QuestGraph;
use questsmith_error::{RenderError, RenderErrorKind, RenderResult};
use tracing::{debug, instrument, warn};

/// Renders the graph for export, refusing graphs whose node ids collide.
///
/// A node id collides when another node uses it or when it is `top` or
/// `end`, which name the overview and closing sections. The export is
/// withheld and every offending id is reported. Dangling targets are logged
/// and rendered with their marker.
///
/// # Errors
///
/// Returns [`RenderErrorKind::DuplicateIdentifier`] listing the colliding ids.
#[instrument(skip_all, fields(nodes = graph.len()))]
pub fn export(graph: &QuestGraph, options: &RenderOptions) -> RenderResult<String> {
    let collisions = graph.anchor_collisions();
    if !collisions.is_empty() {
        warn!(?collisions, "Export withheld");
        return Err(RenderError::new(RenderErrorKind::DuplicateIdentifier(
            collisions,
        )));
    }

    for dangling in graph.dangling_targets() {
        warn!(
            node = %dangling.node_id(),
            choice = dangling.choice_index(),
            target = %dangling.target(),
            "Choice points at an unknown target"
        );
    }

    let html = render(graph, options);
    debug!(bytes = html.len(), "Rendered export");
    Ok(html)
}
