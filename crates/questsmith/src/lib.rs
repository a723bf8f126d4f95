//! Questsmith: branching quests as node graphs, exported as HTML.
//!
//! This crate ties the workspace together. It re-exports the quest model,
//! codec and renderer, adds configuration and project file I/O, and hosts
//! the `questsmith` command line.
//!
//! # Examples
//!
//! ```
//! use questsmith::{Choice, NodeDefaults, QuestGraph, RenderOptions, encode, decode, render};
//!
//! let mut graph = QuestGraph::default();
//! let id = graph.add_node(&NodeDefaults::default(), None).id().clone();
//! graph.push_choice("start", Choice::new("Onwards", &id)).unwrap();
//!
//! let restored = decode(&encode(&graph).unwrap()).unwrap();
//! assert_eq!(restored, graph);
//!
//! let html = render(&restored, &RenderOptions::default());
//! assert!(html.contains(&format!("href=\"#{}\"", id)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
mod project;

pub use config::{CONFIG_ENV, DEFAULT_STAMP_FORMAT, QuestsmithConfig, RenderSettings};
pub use logging::init_tracing;
pub use project::{export_html, load_project, save_project};

pub use questsmith_codec::{Format, decode, decode_as, encode, encode_as};
pub use questsmith_core::{
    Choice, DanglingTarget, Direction, END_ANCHOR, Node, NodeDefaults, NodeDefaultsBuilder,
    QuestGraph, QuestMeta, START_ID, TOP_ANCHOR, lines_to_list, list_to_lines, sanitize,
    suggest_id,
};
pub use questsmith_error::{
    CodecError, CodecErrorKind, ConfigError, ConfigErrorKind, FileError, FileErrorKind,
    GraphError, GraphErrorKind, QuestsmithError, QuestsmithErrorKind, QuestsmithResult,
    RenderError, RenderErrorKind,
};
pub use questsmith_render::{
    Locale, RenderOptions, RenderOptionsBuilder, escape_html, export, render,
};
