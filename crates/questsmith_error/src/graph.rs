//! Quest graph error types.

/// Specific error conditions for quest graph mutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GraphErrorKind {
    /// Identifier could not be turned into an anchor.
    ///
    /// The sanitizer is total, so the model never raises this. It is kept so
    /// callers can name the category when they validate ids themselves.
    #[display("Invalid identifier: '{}'", _0)]
    InvalidIdentifier(String),
    /// Another node already owns the identifier
    #[display("Node id '{}' is already in use", _0)]
    DuplicateIdentifier(String),
    /// No node with the identifier exists
    #[display("Node '{}' not found", _0)]
    NotFound(String),
    /// The mutation would break a structural invariant of the graph
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Error type for quest graph operations.
///
/// # Examples
///
/// ```
/// use questsmith_error::{GraphError, GraphErrorKind};
///
/// let err = GraphError::new(GraphErrorKind::NotFound("cellar".to_string()));
/// assert!(format!("{}", err).contains("cellar"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Graph Error: {} at line {} in {}", kind, line, file)]
pub struct GraphError {
    /// The specific error condition
    pub kind: GraphErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GraphError {
    /// Create a new GraphError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GraphErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for quest graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;
