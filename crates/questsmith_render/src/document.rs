//! Document assembly.

use crate::assets::{SCRIPT, STYLESHEET};
use crate::escape::{escape_html, or_dash};
use crate::{Labels, RenderOptions};
use questsmith_core::{END_ANCHOR, Node, QuestGraph, QuestMeta, TOP_ANCHOR};
use tracing::instrument;

/// Renders the graph as one self-contained HTML document.
///
/// Pure and deterministic: the same graph and options always produce the same
/// bytes. Dangling choice targets are annotated in place and never fail the
/// render; use [`export`](crate::export) to refuse graphs with colliding ids.
///
/// # Examples
///
/// ```
/// use questsmith_core::QuestGraph;
/// use questsmith_render::{RenderOptions, render};
///
/// let html = render(&QuestGraph::default(), &RenderOptions::default());
/// assert!(html.starts_with("<!doctype html>"));
/// assert!(html.contains(r#"<section id="start">"#));
/// ```
#[instrument(skip_all, fields(nodes = graph.len(), locale = %options.locale()))]
pub fn render(graph: &QuestGraph, options: &RenderOptions) -> String {
    let labels = options.locale().labels();
    let meta = graph.meta();
    let mut html = String::with_capacity(16 * 1024);

    push_head(&mut html, meta, labels);
    html.push_str("<body>\n\n");
    push_header(&mut html, graph, labels);
    html.push_str("  <main>\n");
    push_overview(&mut html, graph, labels);
    for node in graph.nodes() {
        push_node(&mut html, node, graph, labels);
    }
    push_end(&mut html, labels);
    html.push_str("  </main>\n\n");
    push_footer(&mut html, meta, options, labels);
    if options.include_scripting() {
        html.push('\n');
        html.push_str(SCRIPT);
    }
    html.push_str("\n</body>\n</html>\n");
    html
}

fn push_head(html: &mut String, meta: &QuestMeta, labels: &Labels) {
    let title = match meta.quest_name().trim() {
        "" => labels.presenter.to_string(),
        name => format!("{}: {}", labels.presenter, name),
    };
    html.push_str("<!doctype html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", labels.lang));
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(&title)));
    html.push_str(STYLESHEET);
    html.push_str(&format!(
        "  <style>:root{{ --active-label: \"{}\"; }}</style>\n",
        labels.active_node
    ));
    html.push_str("</head>\n");
}

fn push_header(html: &mut String, graph: &QuestGraph, labels: &Labels) {
    let meta = graph.meta();
    html.push_str("  <header>\n");
    html.push_str(&format!(
        "    <h1>{}: {}</h1>\n",
        labels.quest,
        or_dash(meta.quest_name())
    ));
    html.push_str(&format!(
        "    <p><strong>{}:</strong> {}</p>\n",
        labels.region,
        or_dash(meta.region())
    ));
    html.push_str(&format!("    <nav aria-label=\"{}\">\n", labels.navigation));
    html.push_str(&format!(
        "      <a href=\"#{}\">{}</a>\n",
        TOP_ANCHOR, labels.overview
    ));
    for node in graph.nodes() {
        html.push_str(&format!(
            "      <a href=\"#{}\">{}</a>\n",
            escape_html(node.id()),
            escape_html(node.display_title())
        ));
    }
    html.push_str("    </nav>\n");
    html.push_str("    <hr>\n");
    html.push_str("  </header>\n\n");
}

fn push_overview(html: &mut String, graph: &QuestGraph, labels: &Labels) {
    let meta = graph.meta();
    let fields = [
        (labels.quest_name, meta.quest_name()),
        (labels.region, meta.region()),
        (labels.quest_giver, meta.quest_giver()),
        (labels.prerequisite, meta.prerequisite()),
        (labels.quest_type, meta.quest_type()),
        (labels.summary, meta.meta_short()),
        (labels.rewards, meta.rewards()),
        (labels.important_flags, meta.important_flags()),
        (labels.version, meta.version_stamp()),
    ];
    // Graphs always hold at least one node; fall back to the overview itself otherwise.
    let first = graph
        .nodes()
        .first()
        .map(|node| node.id().as_str())
        .unwrap_or(TOP_ANCHOR);

    html.push_str(&format!("    <section id=\"{}\">\n", TOP_ANCHOR));
    html.push_str(&format!("      <h2>{}</h2>\n", labels.overview));
    html.push_str(&format!(
        "      <p><strong>{}:</strong> {}</p>\n",
        labels.short_description,
        or_dash(meta.short_description())
    ));
    html.push_str(&format!("      <p><strong>{}</strong></p>\n", labels.metadata));
    html.push_str("      <ul>\n");
    for (label, value) in fields {
        html.push_str(&format!(
            "        <li><strong>{}:</strong> {}</li>\n",
            label,
            or_dash(value)
        ));
    }
    html.push_str("      </ul>\n");
    html.push_str("      <hr>\n");
    html.push_str(&format!(
        "      <p><a href=\"#{}\">{}</a></p>\n",
        escape_html(first),
        labels.to_start
    ));
    html.push_str("    </section>\n\n");
}

fn push_node(html: &mut String, node: &Node, graph: &QuestGraph, labels: &Labels) {
    html.push_str(&format!("    <section id=\"{}\">\n", escape_html(node.id())));
    html.push_str(&format!(
        "      <h2>{}</h2>\n",
        escape_html(node.display_title())
    ));

    push_line(html, labels.scene, node.scene());
    push_line(html, labels.content, node.content());

    if !node.dialog().trim().is_empty() {
        html.push_str(&format!("      <p><strong>{}:</strong></p>\n", labels.dialog));
        html.push_str("      <blockquote>\n");
        // The parser drops one newline right after <pre>, so the dialog starts on its own line.
        html.push_str(&format!("<pre>\n{}</pre>\n", escape_html(node.dialog())));
        html.push_str("      </blockquote>\n");
    }

    if !node.info_items().is_empty() {
        html.push_str(&format!(
            "      <p><strong>{}:</strong></p>\n",
            labels.info_items
        ));
        push_items(html, "      ", node.info_items());
    }
    push_details(html, labels.tech_flags, node.tech_flags());
    push_details(html, labels.outcomes, node.outcomes());

    push_choices(html, node, graph, labels);

    push_line(html, labels.notes, node.notes());
    html.push_str(&format!(
        "      <p><a href=\"#{}\">{}</a></p>\n",
        TOP_ANCHOR, labels.back_to_overview
    ));
    html.push_str("    </section>\n\n");
}

fn push_line(html: &mut String, label: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    html.push_str(&format!(
        "      <p><strong>{}:</strong> {}</p>\n",
        label,
        escape_html(value)
    ));
}

fn push_items(html: &mut String, indent: &str, items: &[String]) {
    html.push_str(&format!("{}<ul>\n", indent));
    for item in items {
        html.push_str(&format!("{}  <li>{}</li>\n", indent, escape_html(item)));
    }
    html.push_str(&format!("{}</ul>\n", indent));
}

fn push_details(html: &mut String, summary: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str("      <details>\n");
    html.push_str(&format!("        <summary>{}</summary>\n", summary));
    push_items(html, "        ", items);
    html.push_str("      </details>\n");
}

fn push_choices(html: &mut String, node: &Node, graph: &QuestGraph, labels: &Labels) {
    if node.choices().is_empty() {
        html.push_str(&format!("      <p><em>{}</em></p>\n", labels.no_choices));
        return;
    }

    html.push_str(&format!("      <h3>{}</h3>\n", labels.choices));
    html.push_str("      <ol>\n");
    for choice in node.choices() {
        let label = match choice.label().trim() {
            "" => labels.choice_placeholder.to_string(),
            label => escape_html(label),
        };
        let target = choice.target();
        let marker = if graph.is_known_target(target) {
            String::new()
        } else {
            format!(
                " <em class=\"unknown-target\">{}</em>",
                labels.unknown_target
            )
        };
        html.push_str(&format!(
            "        <li><a href=\"#{}\">{}</a>{}</li>\n",
            escape_html(target),
            label,
            marker
        ));
    }
    html.push_str("      </ol>\n");
}

fn push_end(html: &mut String, labels: &Labels) {
    html.push_str(&format!("    <section id=\"{}\">\n", END_ANCHOR));
    html.push_str(&format!("      <h2>{}</h2>\n", labels.end_title));
    html.push_str(&format!("      <p>{}</p>\n", labels.end_body));
    html.push_str(&format!(
        "      <p><a href=\"#{}\">{}</a></p>\n",
        TOP_ANCHOR, labels.back_to_overview
    ));
    html.push_str("    </section>\n");
}

fn push_footer(html: &mut String, meta: &QuestMeta, options: &RenderOptions, labels: &Labels) {
    let stamp = match meta.version_stamp().trim() {
        "" => options.fallback_stamp().trim(),
        stamp => stamp,
    };
    html.push_str("  <footer>\n");
    html.push_str("    <hr>\n");
    html.push_str(&format!(
        "    <p><small>{} \u{00b7} {}: {}</small></p>\n",
        labels.presenter,
        labels.version,
        or_dash(stamp)
    ));
    html.push_str("  </footer>\n");
}
