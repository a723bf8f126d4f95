//! Tests for configuration loading.

use questsmith::{ConfigErrorKind, DEFAULT_STAMP_FORMAT, Locale, QuestsmithConfig};
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = QuestsmithConfig::default();
    assert!(config.render.include_scripting);
    assert_eq!(config.render.locale, Locale::English);
    assert_eq!(config.render.stamp_format, DEFAULT_STAMP_FORMAT);
    assert_eq!(config.nodes.id_base(), "node");
    assert_eq!(config.nodes.choice_target(), "end");
}

#[test]
fn test_from_file_full() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[render]
include_scripting = false
locale = "de"
stamp_format = "%d.%m.%Y"

[nodes]
id_base = "knoten"
title_prefix = "Knoten"
choice_label = "Weiter"
choice_target = "top"
"#,
    );

    let config = QuestsmithConfig::from_file(&path).unwrap();
    assert!(!config.render.include_scripting);
    assert_eq!(config.render.locale, Locale::German);
    assert_eq!(config.render.stamp_format, "%d.%m.%Y");
    assert_eq!(config.nodes.id_base(), "knoten");
    assert_eq!(config.nodes.choice_label(), "Weiter");
}

#[test]
fn test_partial_sections_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[nodes]\nid_base = \"scene\"\n");

    let config = QuestsmithConfig::from_file(&path).unwrap();
    assert!(config.render.include_scripting);
    assert_eq!(config.nodes.id_base(), "scene");
    assert_eq!(config.nodes.title_prefix(), "Node");
}

#[test]
fn test_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[render\nlocale = ");
    let err = QuestsmithConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
}

#[test]
fn test_unknown_locale_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[render]\nlocale = \"fr\"\n");
    let err = QuestsmithConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
}

#[test]
fn test_invalid_values() {
    let dir = TempDir::new().unwrap();
    for contents in ["[render]\nstamp_format = \"%Q\"\n", "[nodes]\nid_base = \"  \"\n"] {
        let path = write_config(&dir, contents);
        let err = QuestsmithConfig::from_file(&path).unwrap_err();
        assert!(
            matches!(err.kind, ConfigErrorKind::Invalid(_)),
            "expected invalid for {:?}",
            contents
        );
    }
}

#[test]
fn test_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = QuestsmithConfig::load_with(Some(&missing), None, None).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Read(_)));
}

#[test]
fn test_resolution_order() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("explicit.toml");
    let env = dir.path().join("env.toml");
    let platform = dir.path().join("platform.toml");
    std::fs::write(&explicit, "[nodes]\nid_base = \"explicit\"\n").unwrap();
    std::fs::write(&env, "[nodes]\nid_base = \"env\"\n").unwrap();
    std::fs::write(&platform, "[nodes]\nid_base = \"platform\"\n").unwrap();

    let load = |explicit: Option<&Path>, env: Option<&Path>, platform: Option<&Path>| {
        QuestsmithConfig::load_with(
            explicit,
            env.map(Path::to_path_buf),
            platform.map(Path::to_path_buf),
        )
        .unwrap()
        .nodes
        .id_base()
        .clone()
    };

    assert_eq!(load(Some(&explicit), Some(&env), Some(&platform)), "explicit");
    assert_eq!(load(None, Some(&env), Some(&platform)), "env");
    assert_eq!(load(None, None, Some(&platform)), "platform");
    assert_eq!(load(None, None, Some(&dir.path().join("absent.toml"))), "node");
    assert_eq!(load(None, None, None), "node");
}

#[test]
fn test_render_options_follow_settings() {
    let mut config = QuestsmithConfig::default();
    config.render.include_scripting = false;
    config.render.locale = Locale::German;

    let options = config.render_options("2024-05-01 09:30");
    assert!(!options.include_scripting());
    assert_eq!(options.locale(), Locale::German);
    assert_eq!(options.fallback_stamp(), "2024-05-01 09:30");
}

#[test]
fn test_current_stamp_uses_format() {
    let mut config = QuestsmithConfig::default();
    config.render.stamp_format = "%Y".to_string();
    let stamp = config.current_stamp();
    assert_eq!(stamp.len(), 4);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
}
