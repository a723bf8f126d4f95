//! Persistence codec error types.

/// Kinds of codec errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CodecErrorKind {
    /// Input is not parseable as a project document
    #[display("Malformed document: {}", _0)]
    MalformedDocument(String),
    /// Graph could not be written in the requested format
    #[display("Serialization failed: {}", _0)]
    Serialize(String),
}

/// Codec error with location tracking.
///
/// # Examples
///
/// ```
/// use questsmith_error::{CodecError, CodecErrorKind};
///
/// let err = CodecError::new(CodecErrorKind::MalformedDocument("expected `{`".to_string()));
/// assert!(format!("{}", err).contains("Malformed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Codec Error: {} at line {} in {}", kind, line, file)]
pub struct CodecError {
    /// The kind of error that occurred
    pub kind: CodecErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CodecError {
    /// Create a new codec error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CodecErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
