//! Completion service error types and retry classification.

/// Conditions under which a text completion call fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompletionErrorKind {
    /// API key not found in environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Transport-level failure before a response arrived
    #[display("Completion request failed: {}", _0)]
    Http(String),
    /// Request exceeded its timeout
    #[display("Completion request timed out")]
    Timeout,
    /// Provider rejected the request for quota reasons
    #[display("Completion provider rate limit exceeded")]
    RateLimited,
    /// Provider answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// Response body could not be decoded
    #[display("Malformed completion response: {}", _0)]
    MalformedResponse(String),
    /// Response decoded but carried no text
    #[display("Completion response contained no text")]
    EmptyResponse,
    /// Request could not be assembled
    #[display("Invalid completion request: {}", _0)]
    InvalidRequest(String),
}

impl CompletionErrorKind {
    /// Whether a retry of the same request can reasonably succeed.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyframe_error::CompletionErrorKind;
    ///
    /// assert!(CompletionErrorKind::Timeout.is_retryable());
    /// assert!(!CompletionErrorKind::EmptyResponse.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            CompletionErrorKind::Timeout | CompletionErrorKind::RateLimited => true,
            CompletionErrorKind::Http(_) => true,
            CompletionErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            CompletionErrorKind::MissingApiKey(_)
            | CompletionErrorKind::MalformedResponse(_)
            | CompletionErrorKind::EmptyResponse
            | CompletionErrorKind::InvalidRequest(_) => false,
        }
    }
}

/// Completion error with location tracking.
///
/// # Examples
///
/// ```
/// use storyframe_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::RateLimited);
/// assert!(format!("{}", err).contains("rate limit"));
/// assert!(err.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new completion error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`CompletionErrorKind::is_retryable`].
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
