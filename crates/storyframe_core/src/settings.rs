//! Completion service settings shared by the pipeline and the HTTP drivers.

use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// How to reach and drive the completion service.
///
/// Loaded from the `[completion]` table of `storyframe.toml`.
///
/// # Examples
///
/// ```
/// use storyframe_core::CompletionSettings;
///
/// let settings = CompletionSettings::default();
/// assert_eq!(settings.model, "gpt-3.5-turbo");
/// assert_eq!(settings.max_tokens, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Maximum tokens per response
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Retries after the first attempt for transient failures
    pub max_retries: usize,
    /// Initial retry backoff in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout_secs: 60,
            max_retries: 2,
            retry_backoff_ms: 1000,
        }
    }
}
