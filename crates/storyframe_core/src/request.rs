//! Request and response types for text completion.

use crate::Role;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single-prompt completion request.
///
/// The prompt travels as one message; sampling parameters left unset fall
/// back to the driver's defaults.
///
/// # Examples
///
/// ```
/// use storyframe_core::{CompletionRequest, Role};
///
/// let request = CompletionRequest::builder()
///     .prompt("Describe the scene.")
///     .max_tokens(Some(1000))
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Describe the scene.");
/// assert_eq!(*request.role(), Role::System);
/// assert_eq!(*request.max_tokens(), Some(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Prompt text
    prompt: String,
    /// Role the prompt is sent under
    #[builder(default)]
    role: Role,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Model identifier overriding the driver's default
    #[builder(default)]
    model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new builder for `CompletionRequest`.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Creates a request carrying only a prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            role: Role::default(),
            max_tokens: None,
            temperature: None,
            model: None,
        }
    }
}

/// Text returned by a completion call.
///
/// # Examples
///
/// ```
/// use storyframe_core::CompletionResponse;
///
/// let response = CompletionResponse::new("1. Opening shot");
/// assert_eq!(response.text, "1. Opening shot");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text
    pub text: String,
}

impl CompletionResponse {
    /// Wraps generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
