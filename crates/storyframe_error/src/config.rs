//! Configuration error types.

/// Ways loading configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source could not be read or merged
    #[display("Failed to build configuration: {}", _0)]
    Load(String),
    /// Merged values did not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A value is out of range
    #[display("{} {}", key, reason)]
    Invalid {
        /// Dotted key path, e.g. `segmentation.max_sets`
        key: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use storyframe_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::invalid("segmentation.max_sets", "must be at least 1");
/// assert!(matches!(err.kind, ConfigErrorKind::Invalid { .. }));
/// assert!(format!("{}", err).contains("segmentation.max_sets must be at least 1"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an out-of-range value.
    #[track_caller]
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            key: key.into(),
            reason: reason.into(),
        })
    }
}
