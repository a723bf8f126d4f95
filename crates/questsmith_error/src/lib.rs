//! Error types for the Questsmith toolkit.
//!
//! Every component reports failures through a `XxxError { kind, line, file }`
//! struct that records where it was raised. [`QuestsmithError`] unifies them
//! for front ends that drive several components at once.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod config;
mod file;
mod graph;
mod render;

pub use codec::{CodecError, CodecErrorKind, CodecResult};
pub use config::{ConfigError, ConfigErrorKind};
pub use file::{FileError, FileErrorKind};
pub use graph::{GraphError, GraphErrorKind, GraphResult};
pub use render::{RenderError, RenderErrorKind, RenderResult};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum QuestsmithErrorKind {
    /// Quest graph mutation failed
    Graph(GraphError),
    /// Project document could not be encoded or decoded
    Codec(CodecError),
    /// Export was withheld
    Render(RenderError),
    /// Configuration could not be loaded
    Config(ConfigError),
    /// File could not be read or written
    File(FileError),
}

impl std::fmt::Display for QuestsmithErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestsmithErrorKind::Graph(e) => write!(f, "{}", e),
            QuestsmithErrorKind::Codec(e) => write!(f, "{}", e),
            QuestsmithErrorKind::Render(e) => write!(f, "{}", e),
            QuestsmithErrorKind::Config(e) => write!(f, "{}", e),
            QuestsmithErrorKind::File(e) => write!(f, "{}", e),
        }
    }
}

/// Questsmith error with kind discrimination.
#[derive(Debug)]
pub struct QuestsmithError(Box<QuestsmithErrorKind>);

impl QuestsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: QuestsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuestsmithErrorKind {
        &self.0
    }
}

impl std::fmt::Display for QuestsmithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Questsmith Error: {}", self.0)
    }
}

impl std::error::Error for QuestsmithError {}

// Generic From implementation for any type that converts to QuestsmithErrorKind
impl<T> From<T> for QuestsmithError
where
    T: Into<QuestsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Questsmith operations.
pub type QuestsmithResult<T> = std::result::Result<T, QuestsmithError>;
