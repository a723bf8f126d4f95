//! Project file I/O error types.

/// File operation that failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FileErrorKind {
    /// Reading a project or config file failed
    #[display("Failed to read {}: {}", path, message)]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Writing a project or exported document failed
    #[display("Failed to write {}: {}", path, message)]
    Write {
        /// Path that was written
        path: String,
        /// Underlying I/O message
        message: String,
    },
}

/// File error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("File Error: {} at line {} in {}", kind, line, file)]
pub struct FileError {
    /// The kind of error that occurred
    pub kind: FileErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FileError {
    /// Create a new file error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Wrap a failed read of `path`.
    #[track_caller]
    pub fn read(path: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::new(FileErrorKind::Read {
            path: path.to_string(),
            message: err.to_string(),
        })
    }

    /// Wrap a failed write of `path`.
    #[track_caller]
    pub fn write(path: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::new(FileErrorKind::Write {
            path: path.to_string(),
            message: err.to_string(),
        })
    }
}
