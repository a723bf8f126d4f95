//! Persistence codec for Questsmith quest graphs.
//!
//! A project is stored as a document with two top-level fields, `meta` and
//! `nodes`. JSON is the primary interchange format; TOML carries the same
//! record shape for hand-edited projects.
//!
//! Decoding is permissive: unknown keys are ignored, missing keys and `null`s
//! become empty values, node ids and choice targets are sanitized, and an
//! empty node list yields a single `start` node. Only unparseable input fails.
//!
//! # Examples
//!
//! ```
//! use questsmith_codec::{decode, encode};
//! use questsmith_core::QuestGraph;
//!
//! let graph = QuestGraph::default();
//! let text = encode(&graph).unwrap();
//! assert_eq!(decode(&text).unwrap(), graph);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod conversions;
mod dto;

use dto::ProjectDocument;
use questsmith_core::QuestGraph;
use questsmith_error::{CodecError, CodecErrorKind, CodecResult};
use std::path::Path;
use tracing::{debug, instrument};

/// Textual formats a project can be stored in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// TOML with `[meta]` and `[[nodes]]` tables
    Toml,
}

impl Format {
    /// Picks the format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// Encodes a graph as pretty-printed JSON.
pub fn encode(graph: &QuestGraph) -> CodecResult<String> {
    encode_as(graph, Format::Json)
}

/// Decodes a graph from JSON.
pub fn decode(text: &str) -> CodecResult<QuestGraph> {
    decode_as(text, Format::Json)
}

/// Encodes a graph in the given format.
#[instrument(skip(graph), fields(nodes = graph.len()))]
pub fn encode_as(graph: &QuestGraph, format: Format) -> CodecResult<String> {
    let document = ProjectDocument::from(graph);
    let text = match format {
        Format::Json => serde_json::to_string_pretty(&document).map_err(|e| serialize_error(&e))?,
        Format::Toml => toml::to_string_pretty(&document).map_err(|e| serialize_error(&e))?,
    };
    debug!(bytes = text.len(), "Encoded project");
    Ok(text)
}

/// Decodes a graph from text in the given format.
///
/// Fails with `MalformedDocument` when the text does not parse; no partial
/// graph is returned.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn decode_as(text: &str, format: Format) -> CodecResult<QuestGraph> {
    let document: ProjectDocument = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| malformed(&e))?,
        Format::Toml => toml::from_str(text).map_err(|e| malformed(&e))?,
    };
    debug!(nodes = document.nodes.len(), "Decoded project document");
    Ok(QuestGraph::from(document))
}

#[track_caller]
fn malformed(err: &dyn std::fmt::Display) -> CodecError {
    CodecError::new(CodecErrorKind::MalformedDocument(err.to_string()))
}

#[track_caller]
fn serialize_error(err: &dyn std::fmt::Display) -> CodecError {
    CodecError::new(CodecErrorKind::Serialize(err.to_string()))
}
