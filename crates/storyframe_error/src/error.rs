//! Top-level error wrapper types.

use crate::{CompletionError, ConfigError, OutputError, ScriptError};

/// Every error condition storyframe can report.
///
/// # Examples
///
/// ```
/// use storyframe_error::{StoryframeError, ConfigError};
///
/// let err: StoryframeError = ConfigError::invalid("completion.temperature", "is negative").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryframeErrorKind {
    /// Completion service failure
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Script input error
    #[from(ScriptError)]
    Script(ScriptError),
    /// Failure writing results
    #[from(OutputError)]
    Output(OutputError),
}

/// Storyframe error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyframe_error::{StoryframeErrorKind, StoryframeResult, ScriptError, ScriptErrorKind};
///
/// fn load() -> StoryframeResult<String> {
///     Err(ScriptError::new(ScriptErrorKind::EmptyScript))?
/// }
///
/// let err = load().unwrap_err();
/// assert!(matches!(err.kind(), StoryframeErrorKind::Script(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyframe Error: {}", _0)]
pub struct StoryframeError(Box<StoryframeErrorKind>);

impl StoryframeError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryframeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryframeErrorKind {
        &self.0
    }

    /// The completion failure behind this error, if that is what it is.
    pub fn as_completion(&self) -> Option<&CompletionError> {
        match self.kind() {
            StoryframeErrorKind::Completion(e) => Some(e),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to StoryframeErrorKind
impl<T> From<T> for StoryframeError
where
    T: Into<StoryframeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyframe operations.
pub type StoryframeResult<T> = std::result::Result<T, StoryframeError>;
