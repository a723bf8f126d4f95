//! Tests for project file I/O and the command handlers.

use questsmith::cli::{
    EditNodeArgs, ExportOverrides, OutputFormat, SetMetaArgs, handle_add_choice, handle_add_node,
    handle_check, handle_convert, handle_edit_node, handle_export, handle_move_node, handle_new,
    handle_remove_choice, handle_remove_node, handle_rename_node, handle_set_choices,
    handle_set_meta, outline,
};
use questsmith::{
    Choice, Node, NodeDefaults, QuestGraph, QuestMeta, QuestsmithConfig, QuestsmithErrorKind,
    RenderOptions, export_html, load_project, save_project,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn new_project(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("quest.json");
    handle_new(&path, Some("Ardea"), false).unwrap();
    path
}

#[test]
fn test_save_and_load_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("quest.json");
    let graph = QuestGraph::default();

    save_project(&path, &graph).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().trim_start().starts_with('{'));
    assert_eq!(load_project(&path).unwrap(), graph);
}

#[test]
fn test_save_and_load_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quest.toml");
    let graph = QuestGraph::default();

    save_project(&path, &graph).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("[[nodes]]"));
    assert_eq!(load_project(&path).unwrap(), graph);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_project(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err.kind(), QuestsmithErrorKind::File(_)));
}

#[test]
fn test_load_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"nodes\": [").unwrap();
    let err = load_project(&path).unwrap_err();
    assert!(matches!(err.kind(), QuestsmithErrorKind::Codec(_)));
}

#[test]
fn test_export_withheld_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("quest.html");
    let graph = QuestGraph::from_parts(
        QuestMeta::empty(),
        vec![Node::new("a", "A"), Node::new("a", "Again")],
    );

    let err = export_html(&out, &graph, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err.kind(), QuestsmithErrorKind::Render(_)));
    assert!(!out.exists());
}

#[test]
fn test_new_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);
    assert!(handle_new(&path, None, false).is_err());
    handle_new(&path, None, true).unwrap();
    assert_eq!(load_project(&path).unwrap().meta().quest_name(), "New Quest");
}

#[test]
fn test_node_commands_edit_the_file() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);
    let defaults = NodeDefaults::default();

    handle_add_node(&path, &defaults, None).unwrap();
    handle_add_node(&path, &defaults, Some("start")).unwrap();
    let graph = load_project(&path).unwrap();
    assert_eq!(graph.node_ids(), vec!["start", "node-2", "node-1"]);

    handle_move_node(&path, "node-1", "up".parse().unwrap()).unwrap();
    handle_remove_node(&path, "node-2").unwrap();
    let graph = load_project(&path).unwrap();
    assert_eq!(graph.node_ids(), vec!["start", "node-1"]);

    assert!(handle_add_node(&path, &defaults, Some("missing")).is_err());
}

#[test]
fn test_rename_with_and_without_relink() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);
    handle_add_node(&path, &NodeDefaults::default(), None).unwrap();
    handle_add_choice(&path, "start", "Onwards", "node-1").unwrap();

    handle_rename_node(&path, "node-1", Some("Old Mill"), false, false).unwrap();
    let graph = load_project(&path).unwrap();
    assert!(graph.contains("old-mill"));
    assert_eq!(graph.dangling_targets().len(), 1);

    handle_rename_node(&path, "old-mill", Some("Mill"), false, true).unwrap();
    handle_set_choices(&path, "start", &["Go=mill".to_string()]).unwrap();
    let graph = load_project(&path).unwrap();
    assert!(graph.dangling_targets().is_empty());

    handle_edit_node(
        &path,
        EditNodeArgs {
            id: "mill".to_string(),
            title: Some("Windy Mill".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    handle_rename_node(&path, "mill", None, true, true).unwrap();
    let graph = load_project(&path).unwrap();
    assert!(graph.contains("windy-mill"));
    assert_eq!(graph.node("start").unwrap().choices()[0].target(), "windy-mill");
}

#[test]
fn test_failed_edit_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(handle_remove_node(&path, "start").is_err());
    assert!(handle_remove_choice(&path, "start", 0).is_err());
    assert!(handle_remove_choice(&path, "start", 1).is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_edit_node_and_meta() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);

    handle_edit_node(
        &path,
        EditNodeArgs {
            id: "start".to_string(),
            scene: Some("Dock".to_string()),
            info: Some("Tide is low\n\nFog\n".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    handle_set_meta(
        &path,
        SetMetaArgs {
            region: Some("Reiherbucht".to_string()),
            version_stamp: Some("v1".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let graph = load_project(&path).unwrap();
    let node = graph.node("start").unwrap();
    assert_eq!(node.scene(), "Dock");
    assert_eq!(node.info_items(), &vec!["Tide is low".to_string(), "Fog".to_string()]);
    assert_eq!(graph.meta().quest_name(), "Ardea");
    assert_eq!(graph.meta().region(), "Reiherbucht");
    assert_eq!(graph.meta().version_stamp(), "v1");
}

#[test]
fn test_choice_commands() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);

    handle_set_choices(&path, "start", &["Go=end".to_string(), "Back=top".to_string()]).unwrap();
    handle_add_choice(&path, "start", "Wander", "Nowhere Land").unwrap();
    handle_remove_choice(&path, "start", 1).unwrap();

    let graph = load_project(&path).unwrap();
    let choices = graph.node("start").unwrap().choices().clone();
    assert_eq!(
        choices,
        vec![Choice::new("Back", "top"), Choice::new("Wander", "nowhere-land")]
    );
    assert!(outline(&graph).contains("Wander -> nowhere-land  [unknown target]"));
}

#[test]
fn test_check_reports_duplicates_only_as_failure() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);
    handle_add_choice(&path, "start", "Ask", "missing").unwrap();
    assert!(handle_check(&path, OutputFormat::Json).unwrap());

    let duplicated = QuestGraph::from_parts(
        QuestMeta::empty(),
        vec![Node::new("a", "A"), Node::new("a", "Again")],
    );
    save_project(&path, &duplicated).unwrap();
    assert!(!handle_check(&path, OutputFormat::Human).unwrap());
}

#[test]
fn test_check_fails_for_reserved_node_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quest.json");
    let graph = QuestGraph::from_parts(
        QuestMeta::empty(),
        vec![Node::new("start", "Start"), Node::new("end", "Finale")],
    );
    save_project(&path, &graph).unwrap();

    assert!(!handle_check(&path, OutputFormat::Json).unwrap());
    assert!(!handle_check(&path, OutputFormat::Human).unwrap());
    assert!(export_html(&dir.path().join("quest.html"), &graph, &RenderOptions::default()).is_err());
}

#[test]
fn test_export_and_convert() {
    let dir = TempDir::new().unwrap();
    let path = new_project(&dir);
    handle_add_choice(&path, "start", "Ask", "missing").unwrap();

    handle_export(
        &path,
        &QuestsmithConfig::default(),
        ExportOverrides {
            no_scripting: true,
            stamp: Some("2024-05-01 09:30".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    let html = std::fs::read_to_string(dir.path().join("quest.html")).unwrap();
    assert!(html.contains("Quest Presenter: Ardea"));
    assert!(html.contains("2024-05-01 09:30"));
    assert!(html.contains("(target unknown)"));
    assert!(!html.contains("<script>"));

    let toml_path = dir.path().join("quest.toml");
    handle_convert(&path, &toml_path).unwrap();
    assert_eq!(load_project(&toml_path).unwrap(), load_project(&path).unwrap());
}
