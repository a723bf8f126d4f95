//! Tests for document rendering and export.

use questsmith_core::{Choice, Direction, Node, QuestGraph, QuestMeta};
use questsmith_error::RenderErrorKind;
use questsmith_render::{Locale, RenderOptions, RenderOptionsBuilder, export, render};

fn options() -> RenderOptions {
    RenderOptionsBuilder::default()
        .fallback_stamp("2024-05-01 09:30")
        .build()
        .unwrap()
}

fn ardea() -> QuestGraph {
    let start = Node::new("start", "Start").with_choices(vec![Choice::new("Go", "finish")]);
    let finish = Node::new("finish", "Finish");
    QuestGraph::from_parts(QuestMeta::empty().with_quest_name("Ardea"), vec![start, finish])
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {:?} in output", needle))
}

#[test]
fn test_end_to_end_scenario_order() {
    let html = render(&ardea(), &options());

    let nav_start = position(&html, r##"<a href="#start">Start</a>"##);
    let nav_finish = position(&html, r##"<a href="#finish">Finish</a>"##);
    let start_section = position(&html, r#"<section id="start">"#);
    let go_link = position(&html, r##"<a href="#finish">Go</a>"##);
    let finish_section = position(&html, r#"<section id="finish">"#);
    let placeholder = html[finish_section..].find("No choices.").map(|i| i + finish_section);

    assert!(nav_start < nav_finish);
    assert!(nav_finish < start_section);
    assert!(start_section < go_link);
    assert!(go_link < finish_section);
    assert!(placeholder.is_some());
    assert!(html.contains("<title>Quest Presenter: Ardea</title>"));
}

#[test]
fn test_title_is_escaped() {
    let node = Node::new("start", r#"<b>&"x"</b>"#);
    let graph = QuestGraph::from_parts(QuestMeta::empty(), vec![node]);
    let html = render(&graph, &options());

    assert!(html.contains(r#"&lt;b&gt;&amp;"x"&lt;/b&gt;"#));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_dangling_choice_is_annotated_and_exported() {
    let start = Node::new("start", "Start").with_choices(vec![Choice::new("Ask", "missing")]);
    let graph = QuestGraph::from_parts(QuestMeta::empty(), vec![start]);

    let html = export(&graph, &options()).unwrap();
    assert!(html.contains(
        r##"<a href="#missing">Ask</a> <em class="unknown-target">(target unknown)</em>"##
    ));
}

#[test]
fn test_reserved_targets_are_not_annotated() {
    let start = Node::new("start", "Start").with_choices(vec![
        Choice::new("Back", "top"),
        Choice::new("Done", "end"),
    ]);
    let graph = QuestGraph::from_parts(QuestMeta::empty(), vec![start]);
    let html = render(&graph, &options());

    assert!(html.contains(r##"<li><a href="#top">Back</a></li>"##));
    assert!(html.contains(r##"<li><a href="#end">Done</a></li>"##));
    assert!(!html.contains("(target unknown)"));
    assert!(html.contains(r#"<section id="end">"#));
}

#[test]
fn test_render_is_deterministic() {
    let graph = ardea();
    assert_eq!(render(&graph, &options()), render(&graph, &options()));
}

#[test]
fn test_move_node_swaps_navigation_order() {
    let mut graph = ardea();
    graph.move_node("finish", Direction::Up).unwrap();
    let html = render(&graph, &options());

    let nav_start = position(&html, r##"<a href="#start">Start</a>"##);
    let nav_finish = position(&html, r##"<a href="#finish">Finish</a>"##);
    assert!(nav_finish < nav_start);
    assert!(position(&html, r#"<section id="finish">"#) < position(&html, r#"<section id="start">"#));
}

#[test]
fn test_scripting_is_optional() {
    let graph = ardea();
    let with_script = render(&graph, &options());
    let without = render(
        &graph,
        &RenderOptionsBuilder::default()
            .include_scripting(false)
            .build()
            .unwrap(),
    );

    assert!(with_script.contains("<script>"));
    assert!(with_script.contains("hashchange"));
    assert!(!without.contains("<script>"));
}

#[test]
fn test_empty_blocks_are_omitted() {
    let html = render(&ardea(), &options());
    for label in ["Scene:", "Content:", "Dialog:", "<details>", "Notes:", "<blockquote>"] {
        assert!(!html.contains(label), "unexpected {:?}", label);
    }
}

#[test]
fn test_node_blocks_follow_fixed_order() {
    let mut node = Node::new("start", "Start").with_choices(vec![Choice::new("Go", "end")]);
    node.set_scene("Dock")
        .set_content("Body")
        .set_dialog("A: hi")
        .set_info_items(vec!["Tide".to_string()])
        .set_tech_flags(vec!["flag.a".to_string()])
        .set_outcomes(vec!["Ferry".to_string()])
        .set_notes("Draft");
    let graph = QuestGraph::from_parts(QuestMeta::empty(), vec![node]);
    let html = render(&graph, &options());
    let section = &html[position(&html, r#"<section id="start">"#)..];

    let order = [
        "<strong>Scene:</strong> Dock",
        "<strong>Content:</strong> Body",
        "<blockquote>",
        "<strong>Important information:</strong>",
        "<summary>Technical flags</summary>",
        "<summary>Outcomes</summary>",
        "<h3>Choices</h3>",
        "<strong>Notes:</strong> Draft",
        "Back to overview",
    ];
    let positions: Vec<usize> = order.iter().map(|needle| position(section, needle)).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", positions);
}

#[test]
fn test_dialog_whitespace_is_preserved() {
    let mut node = Node::new("start", "Start");
    node.set_dialog("  A: <hello>\n\n    B: & bye  ");
    let graph = QuestGraph::from_parts(QuestMeta::empty(), vec![node]);
    let html = render(&graph, &options());

    assert!(html.contains("<pre>\n  A: &lt;hello&gt;\n\n    B: &amp; bye  </pre>"));
}

#[test]
fn test_empty_meta_fields_render_placeholder() {
    let html = render(&ardea(), &options());
    assert!(html.contains("<li><strong>Quest giver:</strong> \u{2014}</li>"));
    assert!(html.contains("<li><strong>Quest name:</strong> Ardea</li>"));
    assert!(html.contains(r##"<p><a href="#start">"##));
}

#[test]
fn test_blank_title_falls_back_to_id() {
    let graph = QuestGraph::from_parts(QuestMeta::empty(), vec![Node::new("old-mill", "  ")]);
    let html = render(&graph, &options());
    assert!(html.contains(r##"<a href="#old-mill">old-mill</a>"##));
    assert!(html.contains("<h2>old-mill</h2>"));
}

#[test]
fn test_blank_choice_label_uses_placeholder() {
    let start = Node::new("start", "Start").with_choices(vec![Choice::new("  ", "end")]);
    let graph = QuestGraph::from_parts(QuestMeta::empty(), vec![start]);
    let html = render(&graph, &options());
    assert!(html.contains(r##"<li><a href="#end">Choice</a></li>"##));
}

#[test]
fn test_stamp_prefers_meta_version() {
    let html = render(&ardea(), &options());
    assert!(html.contains("Version: 2024-05-01 09:30"));

    let mut graph = ardea();
    graph.set_meta(graph.meta().clone().with_version_stamp("v1.2"));
    let html = render(&graph, &options());
    assert!(html.contains("Version: v1.2</small>"));
    assert!(!html.contains("2024-05-01 09:30"));
}

#[test]
fn test_blank_stamp_renders_placeholder() {
    let html = render(&ardea(), &RenderOptions::default());
    assert!(html.contains("Version: \u{2014}</small>"));
    assert!(!html.contains("Version: </small>"));
}

#[test]
fn test_german_labels() {
    let options = RenderOptionsBuilder::default()
        .locale(Locale::German)
        .build()
        .unwrap();
    let html = render(&ardea(), &options);

    assert!(html.contains(r#"<html lang="de">"#));
    assert!(html.contains("Keine Optionen."));
    assert!(html.contains("\u{dc}bersicht"));
    assert!(html.contains("Aktiver Knoten"));
}

#[test]
fn test_locale_parsing() {
    assert_eq!("de".parse::<Locale>().unwrap(), Locale::German);
    assert_eq!("EN".parse::<Locale>().unwrap(), Locale::English);
    assert_eq!(Locale::German.to_string(), "de");
    assert!("fr".parse::<Locale>().is_err());
}

#[test]
fn test_export_withholds_duplicates() {
    let graph = QuestGraph::from_parts(
        QuestMeta::empty(),
        vec![Node::new("a", "A"), Node::new("A", "Other"), Node::new("b", "B")],
    );

    let err = export(&graph, &options()).unwrap_err();
    match err.kind {
        RenderErrorKind::DuplicateIdentifier(ids) => assert_eq!(ids, vec!["a".to_string()]),
    }
}

#[test]
fn test_export_withholds_reserved_anchor_ids() {
    let graph = QuestGraph::from_parts(
        QuestMeta::empty(),
        vec![Node::new("start", "Start"), Node::new("end", "Finale")],
    );

    let err = export(&graph, &options()).unwrap_err();
    match err.kind {
        RenderErrorKind::DuplicateIdentifier(ids) => assert_eq!(ids, vec!["end".to_string()]),
    }
    assert_eq!(render(&graph, &options()).matches(r#"<section id="end">"#).count(), 2);
}
