//! Errors writing results for the user.

/// Ways emitting results can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutputErrorKind {
    /// Results could not be serialized
    #[display("Failed to serialize output: {}", _0)]
    Serialize(String),
    /// Writing to the output stream failed
    #[display("Failed to write output: {}", _0)]
    Write(String),
}

/// Output error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Output Error: {} at line {} in {}", kind, line, file)]
pub struct OutputError {
    /// The kind of error that occurred
    pub kind: OutputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OutputError {
    /// Create a new output error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
