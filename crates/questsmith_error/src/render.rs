//! Export error types.

/// Conditions that withhold an HTML export.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderErrorKind {
    /// Several nodes share an anchor, so navigation would be ambiguous
    DuplicateIdentifier(Vec<String>),
}

impl std::fmt::Display for RenderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderErrorKind::DuplicateIdentifier(ids) => write!(
                f,
                "Duplicate node ids prevent export: {}",
                ids.join(", ")
            ),
        }
    }
}

/// Export error with source location tracking.
#[derive(Debug, Clone)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Render Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for RenderError {}

/// Result type for export operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
